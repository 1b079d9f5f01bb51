//! Intent extractor.

use std::sync::Arc;

use brain_core::{extract_json, short_fingerprint, Brain, CompletionRequest};
use concierge_core::Intent;
use tracing::{debug, info, warn};

use crate::error::OrchestratorError;

/// System prompt for intent extraction.
pub const INTENT_SYSTEM_PROMPT: &str = r#"You extract a structured travel intent from messages sent to a medical travel concierge.

Fields:
- procedure: the medical procedure (e.g. "IVF", "dental implants", "rhinoplasty")
- category: one of "dental", "cosmetic", "fertility", "other"
- city: destination city, if mentioned
- country: destination country, if mentioned
- budget: budget in USD, if mentioned (the lower bound when a range is given)
- budgetMax: upper bound when a budget range is given
- travelDate: preferred travel date, if mentioned
- originCity: where the user travels from
- needsHotel: true if the user mentions a hotel, accommodation or lodging
- needsFlight: true if the user mentions flights or airfare
- numberOfPeople: number of travellers (default 1)
- duration: length of stay in days, if mentioned

Respond with a single JSON object using these field names. Use null for anything not mentioned.

Examples:
User: "I need IVF treatment in Turkey under $5000"
Response: {"procedure": "IVF", "category": "fertility", "country": "Turkey", "budget": 5000, "needsHotel": false, "needsFlight": false}

User: "Show me dental implants in Mexico with hotel and flights from New York"
Response: {"procedure": "dental implants", "category": "dental", "country": "Mexico", "originCity": "New York", "needsHotel": true, "needsFlight": true}

User: "Rhinoplasty in Dubai for 2 people, budget 10k-15k"
Response: {"procedure": "rhinoplasty", "category": "cosmetic", "city": "Dubai", "budget": 10000, "budgetMax": 15000, "numberOfPeople": 2, "needsHotel": false, "needsFlight": false}"#;

/// Sampling temperature for extraction.
pub const INTENT_TEMPERATURE: f32 = 0.1;

/// Model-backed intent extractor.
///
/// [`IntentExtractor::extract`] never fails: on any problem it returns the
/// minimal intent (`Intent::default()`).
pub struct IntentExtractor {
    brain: Arc<dyn Brain>,
    model: Option<String>,
}

impl IntentExtractor {
    /// Create an extractor over the given brain.
    pub fn new(brain: Arc<dyn Brain>, model: Option<String>) -> Self {
        info!(
            fingerprint = %short_fingerprint(INTENT_SYSTEM_PROMPT),
            model = ?model,
            "Intent extractor ready"
        );
        Self { brain, model }
    }

    /// Extract the intent of a message.
    pub async fn extract(&self, text: &str) -> Intent {
        match self.try_extract(text).await {
            Ok(intent) => {
                debug!(intent = ?intent, "Intent extracted");
                intent
            }
            Err(e) => {
                warn!(stage = "intent", error = %e, "Intent extraction failed, using minimal intent");
                Intent::default()
            }
        }
    }

    async fn try_extract(&self, text: &str) -> Result<Intent, OrchestratorError> {
        let request = CompletionRequest::new()
            .model(self.model.clone())
            .system(INTENT_SYSTEM_PROMPT)
            .user(text)
            .temperature(INTENT_TEMPERATURE)
            .json_object();

        let completion = self.brain.complete(request).await?;
        let content = completion
            .content_text()
            .ok_or(OrchestratorError::EmptyOutput)?;
        parse_intent(content)
    }
}

/// Parse and validate a model-produced intent.
pub fn parse_intent(content: &str) -> Result<Intent, OrchestratorError> {
    let json = extract_json(content);
    let intent: Intent = serde_json::from_str(json)
        .map_err(|e| OrchestratorError::InvalidOutput(format!("intent: {}", e)))?;
    intent.validate().map_err(OrchestratorError::InvalidOutput)?;
    Ok(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::Category;
    use mock_brain::{FailingBrain, ScriptedBrain};

    #[test]
    fn test_parse_first_example() {
        let intent = parse_intent(
            r#"{"procedure": "IVF", "category": "fertility", "country": "Turkey", "budget": 5000, "needsHotel": false, "needsFlight": false}"#,
        )
        .unwrap();

        assert_eq!(
            intent,
            Intent {
                procedure: Some("IVF".to_string()),
                category: Some(Category::Fertility),
                country: Some("Turkey".to_string()),
                budget: Some(5000.0),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        for content in [
            r#"{"numberOfPeople": 0}"#,
            r#"{"budget": 15000, "budgetMax": 10000}"#,
            r#"{"category": "orthopedics"}"#,
            r#"{"needsHotel": "yes"}"#,
            "[1, 2, 3]",
        ] {
            assert!(parse_intent(content).is_err(), "accepted {}", content);
        }
    }

    #[tokio::test]
    async fn test_extract_sends_message_verbatim() {
        let brain = Arc::new(ScriptedBrain::new().reply(
            "structured travel intent",
            r#"{"procedure": "rhinoplasty", "city": "Dubai", "numberOfPeople": 2}"#,
        ));
        let extractor = IntentExtractor::new(brain.clone(), None);

        let intent = extractor.extract("Rhinoplasty in Dubai for 2 people").await;
        assert_eq!(intent.city.as_deref(), Some("Dubai"));
        assert_eq!(intent.number_of_people, 2);

        let requests = brain.requests().await;
        assert_eq!(
            requests[0].last_user_message(),
            Some("Rhinoplasty in Dubai for 2 people")
        );
        assert_eq!(requests[0].temperature, Some(INTENT_TEMPERATURE));
        assert!(requests[0].model.is_none());
    }

    #[tokio::test]
    async fn test_extract_returns_minimal_intent_on_failure() {
        let minimal = serde_json::json!({"needsHotel": false, "needsFlight": false, "numberOfPeople": 1});

        for output in ["{broken", "", r#"{"duration": 0}"#] {
            let brain = Arc::new(ScriptedBrain::new().reply("structured travel intent", output));
            let intent = IntentExtractor::new(brain, None).extract("anything").await;
            assert_eq!(serde_json::to_value(&intent).unwrap(), minimal);
        }

        let intent = IntentExtractor::new(Arc::new(FailingBrain::new()), None)
            .extract("anything")
            .await;
        assert_eq!(serde_json::to_value(&intent).unwrap(), minimal);
    }
}
