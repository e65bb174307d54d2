//! Error types for the inference layer

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while encoding, generating or decoding
#[derive(Debug, Error)]
pub enum LlmError {
    /// Tokenizer load/encode/decode failures
    #[error("Tokenizer error: {0}")]
    TokenizerError(String),

    /// Failure fetching model files from the Hugging Face hub
    #[error("Hub error: {0}")]
    HubError(String),

    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The inference server answered with something unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Inference server is overloaded
    #[error("Rate limit exceeded (retry after {retry_after:?})")]
    RateLimitExceeded { retry_after: Option<Duration> },

    /// Error reported by the inference server
    #[error("Provider error ({code}): {message}")]
    ProviderError { code: String, message: String },
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::HttpError {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}
