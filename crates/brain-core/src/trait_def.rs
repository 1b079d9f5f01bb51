//! The `Brain` trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BrainError;
use crate::message::{Completion, CompletionRequest};

/// A language model backend.
///
/// Implementations must be cheap to share across concurrent requests; the
/// pipeline holds a single backend behind an `Arc` and issues several calls
/// per user message, some of them concurrently.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Run one generation call.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError>;

    /// Human-readable backend name, used in logs.
    fn name(&self) -> &str;

    /// Whether the backend is ready to serve calls.
    async fn is_ready(&self) -> bool {
        true
    }
}

#[async_trait]
impl<B: Brain + ?Sized> Brain for Arc<B> {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        (**self).complete(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn is_ready(&self) -> bool {
        (**self).is_ready().await
    }
}
