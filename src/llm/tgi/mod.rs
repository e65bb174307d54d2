//! Text Generation Inference backend
//!
//! Talks to a Hugging Face TGI server hosting the chat model over HTTP.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::TgiClient;
