//! Policy filter: a final compliance pass over composed replies.

use std::sync::Arc;

use brain_core::{short_fingerprint, Brain, CompletionRequest};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::error::OrchestratorError;

/// System prompt for the compliance review.
pub const POLICY_SYSTEM_PROMPT: &str = r#"You are a compliance reviewer for a medical travel concierge. Review the reply below against these rules:

1. NO medical advice. Only factual information about clinics.
2. NO unverified claims about treatment outcomes.
3. NO personal health assessments or diagnoses.
4. NO guarantees about medical results.
5. NO recommendations that favor specific clinics without data justification.
6. NO disclosure of personal user data.
7. NO content that violates medical advertising regulations.
8. Be respectful of all cultures and religions.
9. Comply with medical ethics.

If the reply violates any rule, rewrite it minimally: remove or rephrase the violating parts and keep the helpful intent.
If the reply complies, return it unchanged.

Return ONLY the final reply text, with no explanation or commentary."#;

/// Sampling temperature for the review.
pub const POLICY_TEMPERATURE: f32 = 0.1;

/// Output length budget for the review.
pub const POLICY_MAX_TOKENS: u32 = 600;

static MEDICAL_ADVICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)you should|you must|i recommend you|you need to (see a doctor|get treatment|take medication)").expect("valid regex"));
static GUARANTEES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)guaranteed|100% success|cure|definitely work").expect("valid regex"));
static HEALTH_ASSESSMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)your (condition|disease|symptoms|diagnosis)").expect("valid regex"));

/// Outcome of the heuristic policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyCheck {
    pub is_valid: bool,
    /// First violated family, if any.
    pub reason: Option<&'static str>,
}

/// Heuristic scan for prohibited phrasing. Advisory only.
pub fn quick_policy_check(text: &str) -> PolicyCheck {
    let families: [(&Lazy<Regex>, &'static str); 3] = [
        (&MEDICAL_ADVICE, "Contains medical advice"),
        (&GUARANTEES, "Contains outcome guarantees"),
        (&HEALTH_ASSESSMENT, "Contains personal health assessment"),
    ];

    for (pattern, reason) in families {
        if pattern.is_match(text) {
            return PolicyCheck {
                is_valid: false,
                reason: Some(reason),
            };
        }
    }

    PolicyCheck {
        is_valid: true,
        reason: None,
    }
}

/// Model-backed compliance filter.
///
/// Fail-open: when the review produces nothing usable the composed text is
/// returned unchanged.
pub struct PolicyFilter {
    brain: Arc<dyn Brain>,
    model: Option<String>,
}

impl PolicyFilter {
    /// Create a filter over the given brain.
    pub fn new(brain: Arc<dyn Brain>, model: Option<String>) -> Self {
        info!(
            fingerprint = %short_fingerprint(POLICY_SYSTEM_PROMPT),
            model = ?model,
            "Policy filter ready"
        );
        Self { brain, model }
    }

    /// Review a reply, returning the compliant text.
    pub async fn filter(&self, text: &str) -> String {
        match self.try_filter(text).await {
            Ok(filtered) => filtered,
            Err(e) => {
                warn!(stage = "policy", error = %e, "Policy review failed, keeping composed reply");
                text.to_string()
            }
        }
    }

    async fn try_filter(&self, text: &str) -> Result<String, OrchestratorError> {
        let request = CompletionRequest::new()
            .model(self.model.clone())
            .system(POLICY_SYSTEM_PROMPT)
            .user(format!("Review this response for compliance:\n\n{}", text))
            .temperature(POLICY_TEMPERATURE)
            .max_tokens(POLICY_MAX_TOKENS);

        let completion = self.brain.complete(request).await?;
        completion
            .content_text()
            .map(str::to_string)
            .ok_or(OrchestratorError::EmptyOutput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_brain::{FailingBrain, ScriptedBrain};

    #[test]
    fn test_prompt_lists_every_rule_in_order() {
        let prompt = POLICY_SYSTEM_PROMPT.to_lowercase();
        let rules = [
            "1. no medical advice",
            "2. no unverified claims about treatment outcomes",
            "3. no personal health assessments or diagnoses",
            "4. no guarantees about medical results",
            "5. no recommendations that favor specific clinics",
            "6. no disclosure of personal user data",
            "7. no content that violates medical advertising regulations",
            "8. be respectful of all cultures and religions",
            "9. comply with medical ethics",
        ];

        let mut last = 0;
        for rule in rules {
            let at = prompt.find(rule).unwrap_or_else(|| panic!("missing rule: {rule}"));
            assert!(at >= last, "rule out of order: {rule}");
            last = at;
        }

        let unchanged = prompt.find("return it unchanged").unwrap();
        assert!(unchanged > last);
        assert!(!prompt.contains("10."));
    }

    #[test]
    fn test_quick_check_families() {
        let check = quick_policy_check("You should get treatment right away.");
        assert!(!check.is_valid);
        assert_eq!(check.reason, Some("Contains medical advice"));

        let check = quick_policy_check("Results are GUARANTEED.");
        assert_eq!(check.reason, Some("Contains outcome guarantees"));

        let check = quick_policy_check("Based on your symptoms this clinic fits.");
        assert_eq!(check.reason, Some("Contains personal health assessment"));
    }

    #[test]
    fn test_quick_check_priority() {
        let check = quick_policy_check("You must go, it is a guaranteed cure for your condition.");
        assert_eq!(check.reason, Some("Contains medical advice"));
    }

    #[test]
    fn test_quick_check_clean_text() {
        let check = quick_policy_check("Here are three accredited clinics in Istanbul.");
        assert!(check.is_valid);
        assert!(check.reason.is_none());
    }

    #[tokio::test]
    async fn test_filter_returns_reviewed_text() {
        let brain = Arc::new(ScriptedBrain::new().reply("compliance reviewer", "Reviewed reply."));
        let filter = PolicyFilter::new(brain.clone(), None);

        assert_eq!(filter.filter("Original reply.").await, "Reviewed reply.");

        let request = &brain.requests().await[0];
        assert_eq!(request.temperature, Some(POLICY_TEMPERATURE));
        assert_eq!(request.max_tokens, Some(POLICY_MAX_TOKENS));
        assert_eq!(
            request.last_user_message(),
            Some("Review this response for compliance:\n\nOriginal reply.")
        );
    }

    #[tokio::test]
    async fn test_filter_fails_open() {
        let original = "  Clinic A offers packages from $1500.\n";

        let filter = PolicyFilter::new(Arc::new(FailingBrain::new()), None);
        assert_eq!(filter.filter(original).await, original);

        let filter = PolicyFilter::new(Arc::new(ScriptedBrain::new()), None);
        assert_eq!(filter.filter(original).await, original);
    }
}
