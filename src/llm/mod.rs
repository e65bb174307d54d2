//! Inference layer
//!
//! Splits the pretrained causal language model into its two halves: a
//! [`TokenCodec`] that turns text into ids and back, and a [`LanguageModel`]
//! that continues a sequence of ids.

pub mod core;
pub mod tgi;
pub mod tokenizer;

// Re-export commonly used types
pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::LanguageModel,
    types::{FinishReason, GenerateOutput, GenerateRequest},
};

pub use tgi::TgiClient;
pub use tokenizer::{HfTokenizer, TokenCodec, TokenizerSource, DEFAULT_EOS_TOKEN};
