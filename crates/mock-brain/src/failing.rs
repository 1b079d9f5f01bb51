//! Failing brain implementation - every call errors.

use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};

/// A brain whose every call fails with `BrainError::Unavailable`.
///
/// Useful for exercising stage fallbacks.
#[derive(Debug, Clone)]
pub struct FailingBrain {
    reason: String,
}

impl FailingBrain {
    /// Create a failing brain with a generic reason.
    pub fn new() -> Self {
        Self::with_reason("mock failure")
    }

    /// Create a failing brain with the given reason.
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingBrain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Brain for FailingBrain {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, BrainError> {
        Err(BrainError::Unavailable(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "FailingBrain"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_fails() {
        let brain = FailingBrain::with_reason("quota exceeded");
        let err = brain
            .complete(CompletionRequest::new().user("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, BrainError::Unavailable(ref r) if r == "quota exceeded"));
        assert!(!brain.is_ready().await);
    }
}
