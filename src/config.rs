//! Process configuration read from the environment
//!
//! `main` loads an optional `.env` file with `dotenvy` first, then calls
//! [`AppConfig::from_env`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::db::DbConfig;
use crate::llm::{GenerationConfig, TokenizerSource, DEFAULT_EOS_TOKEN};

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Where and how to reach the inference server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// TGI server base URL
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Model the server is expected to host
    pub model_id: String,
    pub tokenizer: TokenizerSource,
    pub eos_token: String,
}

/// Everything the server needs at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DbConfig,
    pub inference: InferenceConfig,
    pub generation: GenerationConfig,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database = DbConfig::from_connection_string(&database_url)
            .map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL",
                reason: e.to_string(),
            })?
            .with_max_pool_size(parse_or(&get, "DATABASE_POOL_SIZE", 16)?);

        let bind_addr = parse_or(&get, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 5000)))?;

        let tokenizer = match get("TOKENIZER_PATH") {
            Some(path) => TokenizerSource::File(PathBuf::from(path)),
            None => TokenizerSource::Hub {
                repo: get("TOKENIZER_REPO").unwrap_or_else(|| "gpt2".to_string()),
            },
        };

        let inference = InferenceConfig {
            url: get("INFERENCE_URL").unwrap_or_else(|| "http://127.0.0.1:8080".to_string()),
            timeout: Duration::from_secs(parse_or(&get, "INFERENCE_TIMEOUT_SECS", 120)?),
            model_id: get("MODEL_ID").unwrap_or_else(|| "microsoft/DialoGPT-medium".to_string()),
            tokenizer,
            eos_token: get("EOS_TOKEN").unwrap_or_else(|| DEFAULT_EOS_TOKEN.to_string()),
        };

        let generation = GenerationConfig::new(parse_or(
            &get,
            "CHAT_MAX_LENGTH",
            crate::llm::core::config::DEFAULT_MAX_LENGTH,
        )?)
        .with_min_new_tokens(parse_or(
            &get,
            "CHAT_MIN_NEW_TOKENS",
            crate::llm::core::config::DEFAULT_MIN_NEW_TOKENS,
        )?);
        generation.validate().map_err(|e| ConfigError::Invalid {
            var: "CHAT_MIN_NEW_TOKENS",
            reason: e.to_string(),
        })?;

        Ok(Self {
            bind_addr,
            database,
            inference,
            generation,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T, G>(get: &G, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
