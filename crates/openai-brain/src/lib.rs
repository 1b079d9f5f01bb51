//! OpenAI-compatible chat completions backend.
//!
//! This crate provides a [`Brain`] implementation that talks to any server
//! exposing the `/v1/chat/completions` endpoint (OpenAI or a compatible
//! gateway).
//!
//! # Features
//!
//! - Per-call model, temperature and output length overrides
//! - JSON object response format for structured stages
//! - Configurable via environment variables or a builder
//! - No retries: a failed call is reported once and the caller falls back
//!
//! # Usage
//!
//! ```rust,no_run
//! use openai_brain::{Brain, CompletionRequest, OpenAiBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = OpenAiBrain::from_env()?;
//!     let request = CompletionRequest::new().user("Say hello");
//!     let completion = brain.complete(request).await?;
//!     println!("{:?}", completion.content_text());
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::OpenAiBrain;
pub use config::{OpenAiBrainConfig, OpenAiBrainConfigBuilder};

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, Brain, BrainError, ChatMessage, Completion, CompletionRequest, ResponseFormat,
};
