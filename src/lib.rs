//! `travelbudget` - Travel budget estimation
//!
//! This library turns a structured travel plan into a per-category cost
//! breakdown using static rate tables, and can ask a language model to
//! refine that breakdown.

pub mod budget;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod models;

// Re-export core types for public API
pub use budget::{BudgetEstimator, RefinementOutcome, estimate};
pub use config::TravelBudgetConfig;
pub use error::TravelBudgetError;
pub use llm::{LlmClient, OpenAiClient};
pub use models::{
    AccommodationDetails, ActivityDetails, BudgetBreakdown, TransportationDetails, TravelPlan,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelBudgetError>;
