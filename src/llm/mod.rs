//! Language model integration used for budget refinement
//!
//! The estimator only needs text in and text out; timeouts and retries are
//! the client's business.

pub mod openai;

use async_trait::async_trait;

use crate::Result;

pub use openai::OpenAiClient;

/// Abstraction over a chat-style language model
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single prompt and return the model's reply text.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logs.
    fn model_name(&self) -> &str;
}
