//! Tokenization for the chat model
//!
//! [`TokenCodec`] is the encode/decode half of the inference collaborator.
//! [`HfTokenizer`] implements it with a Hugging Face `tokenizer.json`, either
//! read from disk or fetched from the hub.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::llm::core::error::LlmError;

/// End-of-sequence marker of GPT-2 family models (DialoGPT included)
pub const DEFAULT_EOS_TOKEN: &str = "<|endoftext|>";

/// Text <-> token id conversion plus the model's end-of-sequence marker
pub trait TokenCodec: Send + Sync {
    /// Encode text, recognizing special tokens such as the EOS marker
    fn encode(&self, text: &str) -> Result<Vec<u32>, LlmError>;

    /// Decode ids back to text
    fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String, LlmError>;

    /// The end-of-sequence marker as text
    fn eos_token(&self) -> &str;

    /// The end-of-sequence marker as an id
    fn eos_token_id(&self) -> u32;
}

/// Where to load `tokenizer.json` from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerSource {
    /// A local file
    File(PathBuf),
    /// A Hugging Face hub model repository
    Hub { repo: String },
}

/// [`TokenCodec`] backed by the `tokenizers` crate
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
    eos_token: String,
    eos_token_id: u32,
}

impl HfTokenizer {
    /// Wrap a loaded tokenizer
    ///
    /// # Errors
    ///
    /// Returns `LlmError::TokenizerError` if `eos_token` is not in the vocabulary.
    pub fn new(inner: tokenizers::Tokenizer, eos_token: &str) -> Result<Self, LlmError> {
        let eos_token_id = inner.token_to_id(eos_token).ok_or_else(|| {
            LlmError::TokenizerError(format!("EOS token '{}' is not in the vocabulary", eos_token))
        })?;

        Ok(Self {
            inner,
            eos_token: eos_token.to_string(),
            eos_token_id,
        })
    }

    /// Load a `tokenizer.json` from disk
    pub fn from_file(path: impl AsRef<Path>, eos_token: &str) -> Result<Self, LlmError> {
        let path = path.as_ref();
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            LlmError::TokenizerError(format!("Failed to load {}: {}", path.display(), e))
        })?;
        Self::new(inner, eos_token)
    }

    /// Download (or reuse the cached) `tokenizer.json` of a hub repository
    pub async fn from_hub(repo: &str, eos_token: &str) -> Result<Self, LlmError> {
        let repo_id = repo.to_string();
        let path = tokio::task::spawn_blocking(move || {
            let api = hf_hub::api::sync::Api::new()
                .map_err(|e| LlmError::HubError(format!("hf-hub init failed: {}", e)))?;
            api.model(repo_id)
                .get("tokenizer.json")
                .map_err(|e| LlmError::HubError(format!("hf-hub download failed: {}", e)))
        })
        .await
        .map_err(|e| LlmError::HubError(format!("download task panicked: {}", e)))??;

        info!(repo, path = %path.display(), "tokenizer fetched from hub");
        Self::from_file(path, eos_token)
    }

    /// Load from whichever source the configuration names
    pub async fn load(source: &TokenizerSource, eos_token: &str) -> Result<Self, LlmError> {
        match source {
            TokenizerSource::File(path) => Self::from_file(path, eos_token),
            TokenizerSource::Hub { repo } => Self::from_hub(repo, eos_token).await,
        }
    }
}

impl TokenCodec for HfTokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>, LlmError> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| LlmError::TokenizerError(format!("encode failed: {}", e)))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String, LlmError> {
        self.inner
            .decode(ids, skip_special_tokens)
            .map_err(|e| LlmError::TokenizerError(format!("decode failed: {}", e)))
    }

    fn eos_token(&self) -> &str {
        &self.eos_token
    }

    fn eos_token_id(&self) -> u32 {
        self.eos_token_id
    }
}
