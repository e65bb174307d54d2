//! Core abstractions for the inference layer

pub mod config;
pub mod error;
pub mod provider;
pub mod types;
