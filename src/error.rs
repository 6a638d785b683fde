//! Error types and handling for the `travelbudget` library

use thiserror::Error;

/// Main error type for the budget estimator
#[derive(Error, Debug)]
pub enum TravelBudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// LLM service communication errors
    #[error("LLM error: {message}")]
    Llm { message: String },

    /// Malformed plan or budget data
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelBudgetError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new LLM error
    pub fn llm<S: Into<String>>(message: S) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelBudgetError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TravelBudgetError::Llm { .. } => {
                "Unable to reach the language model service. The unrefined estimate is still valid."
                    .to_string()
            }
            TravelBudgetError::Parse { message } => format!("Invalid data: {message}"),
            TravelBudgetError::Io { .. } => {
                "File operation failed. Please check the path and file permissions.".to_string()
            }
        }
    }
}
