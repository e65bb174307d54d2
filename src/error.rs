//! Startup error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::db;
use crate::llm::LlmError;

/// Anything that can stop the server from starting
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("database error: {0}")]
    Database(#[from] db::Error),

    #[error("inference error: {0}")]
    Inference(#[from] LlmError),
}
