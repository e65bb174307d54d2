//! Model trait for causal language model backends

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{GenerateOutput, GenerateRequest},
};

/// Main interface that every causal language model backend must satisfy
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Continue the prompt in `request`
    ///
    /// Returns the prompt ids followed by at most `request.max_new_tokens`
    /// generated ids.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateOutput, LlmError>;
}
