//! Text Generation Inference wire types for `POST /generate`

use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgiRequest {
    pub inputs: String,
    pub parameters: TgiParameters,
}

/// Generation parameters understood by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgiParameters {
    pub max_new_tokens: u32,
    /// Ask for per-token ids in the response
    pub details: bool,
    pub return_full_text: bool,
    /// Always false: replies are decoded greedily
    pub do_sample: bool,
}

/// Successful response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgiResponse {
    pub generated_text: String,
    #[serde(default)]
    pub details: Option<TgiDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgiDetails {
    pub finish_reason: String,
    pub generated_tokens: u32,
    #[serde(default)]
    pub tokens: Vec<TgiToken>,
}

/// One generated token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgiToken {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub logprob: Option<f32>,
    #[serde(default)]
    pub special: bool,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TgiErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_type: Option<String>,
}
