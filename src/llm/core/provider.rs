//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{GenerateRequest, GenerateResponse},
};

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the conversation to the model and wait for one complete turn.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;
}
