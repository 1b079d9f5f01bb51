//! Mock language model backends for testing the concierge pipeline.
//!
//! This crate provides mock implementations of the `Brain` trait:
//! - `ScriptedBrain` - Answers by system-prompt marker and records every request
//! - `EchoBrain` - Echoes the last user message back
//! - `FailingBrain` - Fails every call
//! - `DelayedBrain` - Wraps another brain with artificial delay
//!
//! For production use, see the `openai-brain` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, CompletionRequest, ScriptedBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = ScriptedBrain::new().reply("travel assistant", "Hello!");
//!
//!     let request = CompletionRequest::new()
//!         .system("You are a travel assistant.")
//!         .user("Hi");
//!
//!     let completion = brain.complete(request).await?;
//!     assert_eq!(completion.content_text(), Some("Hello!"));
//!     assert_eq!(brain.call_count().await, 1);
//!     Ok(())
//! }
//! ```

mod delayed;
mod echo;
mod failing;
mod scripted;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};

pub use delayed::DelayedBrain;
pub use echo::EchoBrain;
pub use failing::FailingBrain;
pub use scripted::{Outcome, ScriptedBrain};
