//! Core types for the inference layer

use serde::{Deserialize, Serialize};

/// Request to continue an encoded prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Prompt text, including the end-of-sequence marker
    pub inputs: String,
    /// The same prompt as token ids
    pub input_ids: Vec<u32>,
    /// Upper bound on generated tokens
    pub max_new_tokens: usize,
}

/// Result of a generate call
///
/// Mirrors a causal-LM `generate`: `sequence` is the prompt ids followed by
/// the generated ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOutput {
    pub sequence: Vec<u32>,
    pub finish_reason: FinishReason,
}

/// Reason generation stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Hit the token budget
    Length,
    /// Model emitted the end-of-sequence token
    EosToken,
    /// Hit a stop sequence
    StopSequence,
    /// Provider-specific reason
    Other(String),
}

impl FinishReason {
    pub fn from_provider(reason: &str) -> Self {
        match reason {
            "length" => FinishReason::Length,
            "eos_token" => FinishReason::EosToken,
            "stop_sequence" => FinishReason::StopSequence,
            other => FinishReason::Other(other.to_string()),
        }
    }
}
