//! Per-stage model selection.
//!
//! Each generation stage may run on its own model. A stage with no override
//! uses the backend's configured default model.

use std::env;

/// Model overrides for each pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageModels {
    /// Emotion classifier model.
    pub emotion: Option<String>,
    /// Intent extractor model.
    pub intent: Option<String>,
    /// Standard and adaptive composer model.
    pub composer: Option<String>,
    /// Policy filter model.
    pub policy: Option<String>,
}

impl StageModels {
    /// Create from environment variables.
    ///
    /// Environment variables (all optional, empty means unset):
    /// - `EMOTION_MODEL` - Emotion classifier model
    /// - `INTENT_MODEL` - Intent extractor model
    /// - `COMPOSER_MODEL` - Composer model
    /// - `POLICY_MODEL` - Policy filter model
    pub fn from_env() -> Self {
        Self {
            emotion: read_model("EMOTION_MODEL"),
            intent: read_model("INTENT_MODEL"),
            composer: read_model("COMPOSER_MODEL"),
            policy: read_model("POLICY_MODEL"),
        }
    }

    /// Use the same model for every stage.
    pub fn uniform(model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            emotion: Some(model.clone()),
            intent: Some(model.clone()),
            composer: Some(model.clone()),
            policy: Some(model),
        }
    }
}

fn read_model(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_overrides() {
        let models = StageModels::default();
        assert!(models.emotion.is_none());
        assert!(models.intent.is_none());
        assert!(models.composer.is_none());
        assert!(models.policy.is_none());
    }

    #[test]
    fn test_uniform() {
        let models = StageModels::uniform("gpt-4o");
        assert_eq!(models.emotion.as_deref(), Some("gpt-4o"));
        assert_eq!(models.policy.as_deref(), Some("gpt-4o"));
    }
}
