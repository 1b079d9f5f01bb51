//! Standard response composer: fixed prompt, no emotional input.

use std::sync::Arc;

use brain_core::{short_fingerprint, Brain, CompletionRequest};
use concierge_core::{Clinic, Flight, Hotel, Intent};
use tracing::{info, warn};

use crate::context::build_standard_context;

/// System prompt for the standard composer.
pub const STANDARD_SYSTEM_PROMPT: &str = r#"You are a friendly assistant for a medical travel concierge. You help people find verified clinics and plan their medical travel.

CRITICAL RULES:
1. Use ONLY the information provided. Never invent clinic names, prices or details.
2. If no clinics were found, politely suggest adjusting the search.
3. Do NOT give medical advice. Only share facts about clinics and logistics.
4. Be warm, professional and empathetic.
5. Keep replies concise but informative.
6. If hotels or flights are listed, mention them briefly as options from trusted partners.
7. Remind the user that the clinics are verified and accredited.
8. Invite the user to request a call or save options for more details.

Your reply should acknowledge the specific request, present the clinics found (if any) with key details, mention hotel and flight options when available, and end with a call to action.

Do not include JSON, code or structured data. Write naturally, as if speaking to the user."#;

/// Sampling temperature.
pub const STANDARD_TEMPERATURE: f32 = 0.7;

/// Output length budget.
pub const STANDARD_MAX_TOKENS: u32 = 500;

/// Reply when the model returns no content.
pub const STANDARD_EMPTY_REPLY: &str =
    "I found some options for you. Please let me know if you'd like more details!";

/// Reply when the model call fails.
pub const STANDARD_ERROR_REPLY: &str =
    "I'm here to help! Could you please rephrase your request or provide more details?";

/// Composer used when adaptive mode is off.
pub struct StandardComposer {
    brain: Arc<dyn Brain>,
    model: Option<String>,
}

impl StandardComposer {
    /// Create a composer over the given brain.
    pub fn new(brain: Arc<dyn Brain>, model: Option<String>) -> Self {
        info!(
            fingerprint = %short_fingerprint(STANDARD_SYSTEM_PROMPT),
            model = ?model,
            "Standard composer ready"
        );
        Self { brain, model }
    }

    /// Compose a reply. Never fails.
    pub async fn compose(
        &self,
        intent: &Intent,
        clinics: &[Clinic],
        hotels: &[Hotel],
        flights: &[Flight],
    ) -> String {
        let request = CompletionRequest::new()
            .model(self.model.clone())
            .system(STANDARD_SYSTEM_PROMPT)
            .user(build_standard_context(intent, clinics, hotels, flights))
            .temperature(STANDARD_TEMPERATURE)
            .max_tokens(STANDARD_MAX_TOKENS);

        match self.brain.complete(request).await {
            Ok(completion) => match completion.content_text() {
                Some(text) => text.to_string(),
                None => {
                    warn!(stage = "compose", "Standard composer returned no content");
                    STANDARD_EMPTY_REPLY.to_string()
                }
            },
            Err(e) => {
                warn!(stage = "compose", error = %e, "Standard composition failed, using fallback reply");
                STANDARD_ERROR_REPLY.to_string()
            }
        }
    }
}
