//! Core trait and types for language model backends.
//!
//! Every generation stage of the concierge pipeline talks to a language model
//! through the same narrow contract defined here:
//!
//! - [`Brain`] - The trait that all model backends implement
//! - [`CompletionRequest`] / [`Completion`] - One generation call and its result
//! - [`BrainError`] - Error types for model calls
//! - [`extract_json`] - Locate a JSON object inside untrusted model output
//! - [`hash_prompt`] - Fingerprint prompts for logging
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};
//!
//! struct MyBrain;
//!
//! #[async_trait]
//! impl Brain for MyBrain {
//!     async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
//!         let last = request.last_user_message().unwrap_or_default().to_string();
//!         Ok(Completion::text(last))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBrain"
//!     }
//! }
//! ```

mod error;
mod json;
mod message;
mod prompt;
mod trait_def;

pub use error::BrainError;
pub use json::extract_json;
pub use message::{ChatMessage, Completion, CompletionRequest, ResponseFormat, Usage};
pub use prompt::{hash_prompt, short_fingerprint};
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
