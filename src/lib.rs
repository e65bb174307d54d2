// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

// Startup plumbing
pub mod config;
pub mod error;
pub mod telemetry;

// Persistence
pub mod db;

// Inference layer and the chat convention built on it
pub mod chat;
pub mod llm;

pub use chat::ChatEngine;
pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;
