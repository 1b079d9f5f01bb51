//! Inbound chat request.

use concierge_core::ConversationTurn;
use serde::{Deserialize, Serialize};

use crate::error::OrchestratorError;

/// Display locale. Only affects which clinic and package names are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Locale {
    #[default]
    En,
    /// Arabic names where available.
    Uae,
}

impl Locale {
    /// Whether localized (Arabic) names should be preferred.
    pub fn prefers_localized(&self) -> bool {
        matches!(self, Locale::Uae)
    }
}

impl From<Option<String>> for Locale {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("uae") => Locale::Uae,
            _ => Locale::En,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A user message entering the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default)]
    pub locale: Locale,

    /// Prior turns, oldest first.
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,

    /// Emotion-aware composition; on unless explicitly disabled.
    #[serde(default = "default_true")]
    pub use_adaptive_mode: bool,
}

impl ChatRequest {
    /// Create a request with default options.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: None,
            locale: Locale::En,
            conversation_history: Vec::new(),
            use_adaptive_mode: true,
        }
    }

    /// Set the session identifier.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the display locale.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the prior conversation turns.
    pub fn history(mut self, turns: Vec<ConversationTurn>) -> Self {
        self.conversation_history = turns;
        self
    }

    /// Enable or disable adaptive mode.
    pub fn adaptive(mut self, enabled: bool) -> Self {
        self.use_adaptive_mode = enabled;
        self
    }

    /// Reject requests with an empty or whitespace-only message.
    pub fn validate(&self) -> Result<(), OrchestratorError> {
        if self.message.trim().is_empty() {
            return Err(OrchestratorError::InvalidRequest(
                "Message is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::Role;

    #[test]
    fn test_defaults_from_minimal_json() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(request.message, "hi");
        assert_eq!(request.locale, Locale::En);
        assert!(request.use_adaptive_mode);
        assert!(request.conversation_history.is_empty());
        assert!(request.session_id.is_none());
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "message": "IVF in Dubai",
            "sessionId": "abc",
            "locale": "uae",
            "useAdaptiveMode": false,
            "conversationHistory": [
                {"role": "user", "content": "hello"},
                {"role": "assistant", "content": "hi there"}
            ]
        }"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.session_id.as_deref(), Some("abc"));
        assert_eq!(request.locale, Locale::Uae);
        assert!(!request.use_adaptive_mode);
        assert_eq!(request.conversation_history[1].role, Role::Assistant);
    }

    #[test]
    fn test_unknown_or_null_locale_is_english() {
        for json in [
            r#"{"message": "x", "locale": "fr"}"#,
            r#"{"message": "x", "locale": null}"#,
        ] {
            let request: ChatRequest = serde_json::from_str(json).unwrap();
            assert_eq!(request.locale, Locale::En);
        }
    }

    #[test]
    fn test_validate_rejects_blank_message() {
        assert!(ChatRequest::new("   \n").validate().is_err());
        assert!(ChatRequest::new("").validate().is_err());
        assert!(ChatRequest::new("dental implants").validate().is_ok());

        let missing: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            missing.validate(),
            Err(OrchestratorError::InvalidRequest(_))
        ));
    }
}
