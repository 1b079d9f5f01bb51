//! Adaptive response composer: emotion-aware prompt, tuned parameters and
//! emotion-aware fallback replies.

use std::sync::Arc;

use brain_core::{short_fingerprint, Brain, ChatMessage, CompletionRequest};
use concierge_core::{
    Clinic, ConversationTurn, EmotionProfile, Flight, Hotel, Intent, PrimaryEmotion,
    QueryComplexity, Role, SensitivityLevel, SuggestedTone,
};
use tracing::{debug, info, warn};

use crate::context::build_adaptive_context;
use crate::error::OrchestratorError;

/// Prior turns kept in the prompt.
pub const MAX_HISTORY_TURNS: usize = 4;

/// Opening persona of every adaptive system prompt.
pub const PERSONA: &str = "You are a knowledgeable and caring medical travel consultant. You help people find the right medical care abroad.";

/// Rules appended to every adaptive system prompt.
pub const CORE_RULES: &str = "CORE RULES (always follow):
1. Use ONLY information from the provided search results. Never invent clinic names, prices or details.
2. NEVER give medical advice. You are a travel consultant, not a doctor.
3. If nothing was found, say so and suggest alternatives or adjustments.
4. Be truthful. If something isn't available, say so.
5. Remember that a real person with real concerns is reading your reply.

RESPONSE STRUCTURE:
- Think about what this person needs to hear right now
- Adapt language and level of detail to how they feel
- If they seem overwhelmed, simplify. If they want details, provide them
- End with a natural next step or question
- Be conversational and human";

const SENSITIVITY_NOTE: &str = "IMPORTANT: This is a sensitive topic. Be extra compassionate and patient, and acknowledge their feelings naturally.";

const EMPATHY_NOTE: &str = "Show genuine empathy. This person needs reassurance and understanding, not just information.";

/// Fallback when the profile asks for empathy.
pub const EMPATHY_FALLBACK: &str = "I understand this is important to you, and I want to help. I'm experiencing a temporary issue, but I'll be back shortly to assist you properly. Your concerns matter to me.";

/// Fallback for urgent users.
pub const URGENT_FALLBACK: &str = "I apologize for the delay. I'm working to get you the information you need as quickly as possible. Please bear with me for just a moment.";

/// Fallback for everyone else.
pub const CLARIFY_FALLBACK: &str = "I'm here to help you find the right medical care. Could you please rephrase your question, and I'll do my best to assist you?";

/// Behavioral stance for the detected emotion.
pub fn emotion_guidance(emotion: PrimaryEmotion) -> &'static str {
    match emotion {
        PrimaryEmotion::Anxious | PrimaryEmotion::Scared => "EMOTIONAL STATE: The user is anxious or worried.
YOUR APPROACH: Be reassuring and calm. Acknowledge their concerns naturally. Focus on safety, accreditations and track record. Give concrete, factual information that builds confidence.",
        PrimaryEmotion::Frustrated => "EMOTIONAL STATE: The user is frustrated, possibly after bad experiences.
YOUR APPROACH: Be understanding and solution-focused. Avoid vague answers. Be direct and helpful, acknowledge what they have been through and show you are here to make things easier.",
        PrimaryEmotion::Desperate | PrimaryEmotion::Urgent => "EMOTIONAL STATE: The user has an urgent need.
YOUR APPROACH: Be efficient and direct while still caring. Give quick, actionable information and show concrete options right away. Mention immediate availability if relevant.",
        PrimaryEmotion::Confused => "EMOTIONAL STATE: The user does not fully understand something.
YOUR APPROACH: Be educational and patient. Break complex information down simply and check understanding naturally. Don't overwhelm them with too much at once.",
        PrimaryEmotion::Excited | PrimaryEmotion::Hopeful => "EMOTIONAL STATE: The user is positive and enthusiastic.
YOUR APPROACH: Match their energy while staying professional. Highlight the positives and keep the momentum going. This is a good moment for thorough information.",
        PrimaryEmotion::Skeptical => "EMOTIONAL STATE: The user doubts medical travel.
YOUR APPROACH: Build trust with facts. Emphasize verification, accreditations and reviews. Be transparent about what can and cannot be guaranteed, and address concerns honestly.",
        PrimaryEmotion::Overwhelmed => "EMOTIONAL STATE: The user feels overwhelmed by choices or information.
YOUR APPROACH: Simplify everything. Narrow the options down and give a clear suggestion of where to start. Help them feel in control again.",
        PrimaryEmotion::Curious => "EMOTIONAL STATE: The user is exploring and learning.
YOUR APPROACH: Be informative and engaging. Provide context, explain how things work and share useful details.",
        PrimaryEmotion::Neutral => "EMOTIONAL STATE: Neutral inquiry.
YOUR APPROACH: Be helpful and professional. Give clear information and match their level of formality.",
    }
}

/// Tone instruction; `None` gets a balanced default.
///
/// The pipeline always passes `Some`: a profile with a missing or unknown tone
/// fails validation and is replaced by [`EmotionProfile::default`] before
/// composing. The `None` arm serves callers without a profile.
pub fn tone_instruction(tone: Option<SuggestedTone>) -> &'static str {
    match tone {
        Some(SuggestedTone::Casual) => "TONE: Friendly and conversational, like a knowledgeable friend.",
        Some(SuggestedTone::Professional) => "TONE: Polished and competent, formal but not stiff, like a trusted consultant.",
        Some(SuggestedTone::Reassuring) => "TONE: Warm and calming, gentle language, like a caring advisor.",
        Some(SuggestedTone::Educational) => "TONE: Informative and clear, like a patient teacher.",
        Some(SuggestedTone::Direct) => "TONE: Concise and action-oriented. Get to the point.",
        Some(SuggestedTone::Consultative) => "TONE: Advisory and thoughtful. Think through the options with them.",
        None => "TONE: Helpful and balanced.",
    }
}

/// Sampling temperature for a tone; `None` gets 0.7.
///
/// Inside the pipeline a missing tone resolves to the default profile's
/// professional tone (0.5), not to the `None` arm.
pub fn temperature_for(tone: Option<SuggestedTone>) -> f32 {
    match tone {
        Some(SuggestedTone::Casual) => 0.8,
        Some(SuggestedTone::Educational) => 0.6,
        Some(SuggestedTone::Reassuring) => 0.7,
        Some(SuggestedTone::Direct) => 0.4,
        Some(SuggestedTone::Professional) => 0.5,
        Some(SuggestedTone::Consultative) => 0.6,
        None => 0.7,
    }
}

/// Output length budget for a complexity; `None` gets 500, same as the
/// default profile's moderate complexity.
pub fn max_tokens_for(complexity: Option<QueryComplexity>) -> u32 {
    match complexity {
        Some(QueryComplexity::Simple) => 300,
        Some(QueryComplexity::Moderate) => 500,
        Some(QueryComplexity::Complex) => 700,
        None => 500,
    }
}

/// Canned reply used when generation fails.
pub fn fallback_reply(emotion: &EmotionProfile) -> &'static str {
    if emotion.requires_empathy {
        EMPATHY_FALLBACK
    } else if emotion.primary_emotion == PrimaryEmotion::Urgent {
        URGENT_FALLBACK
    } else {
        CLARIFY_FALLBACK
    }
}

/// System prompt for a given profile.
pub fn build_system_prompt(emotion: &EmotionProfile) -> String {
    let mut prompt = format!(
        "{}\n\n{}\n\n{}",
        PERSONA,
        emotion_guidance(emotion.primary_emotion),
        tone_instruction(Some(emotion.suggested_tone))
    );

    if emotion.sensitivity_level == SensitivityLevel::High {
        prompt.push_str("\n\n");
        prompt.push_str(SENSITIVITY_NOTE);
    }
    if emotion.requires_empathy {
        prompt.push_str("\n\n");
        prompt.push_str(EMPATHY_NOTE);
    }

    prompt.push_str("\n\n");
    prompt.push_str(CORE_RULES);
    prompt
}

/// The last [`MAX_HISTORY_TURNS`] turns as chat messages, oldest first.
pub fn recent_history(history: &[ConversationTurn]) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    history[start..]
        .iter()
        .map(|turn| match turn.role {
            Role::User => ChatMessage::user(turn.content.clone()),
            Role::Assistant => ChatMessage::assistant(turn.content.clone()),
        })
        .collect()
}

/// Composer used when adaptive mode is on.
pub struct AdaptiveComposer {
    brain: Arc<dyn Brain>,
    model: Option<String>,
}

impl AdaptiveComposer {
    /// Create a composer over the given brain.
    pub fn new(brain: Arc<dyn Brain>, model: Option<String>) -> Self {
        info!(
            fingerprint = %short_fingerprint(CORE_RULES),
            model = ?model,
            "Adaptive composer ready"
        );
        Self { brain, model }
    }

    /// Compose a reply. Never fails; see [`fallback_reply`].
    pub async fn compose(
        &self,
        intent: &Intent,
        emotion: &EmotionProfile,
        clinics: &[Clinic],
        hotels: &[Hotel],
        flights: &[Flight],
        history: &[ConversationTurn],
    ) -> String {
        match self
            .try_compose(intent, emotion, clinics, hotels, flights, history)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(stage = "compose", error = %e, "Adaptive composition failed, using fallback reply");
                fallback_reply(emotion).to_string()
            }
        }
    }

    async fn try_compose(
        &self,
        intent: &Intent,
        emotion: &EmotionProfile,
        clinics: &[Clinic],
        hotels: &[Hotel],
        flights: &[Flight],
        history: &[ConversationTurn],
    ) -> Result<String, OrchestratorError> {
        let system_prompt = build_system_prompt(emotion);
        let temperature = temperature_for(Some(emotion.suggested_tone));
        let max_tokens = max_tokens_for(Some(emotion.query_complexity));

        debug!(
            fingerprint = %short_fingerprint(&system_prompt),
            temperature,
            max_tokens,
            history_turns = history.len().min(MAX_HISTORY_TURNS),
            "Adaptive prompt built"
        );

        let request = CompletionRequest::new()
            .model(self.model.clone())
            .system(system_prompt)
            .history(recent_history(history))
            .user(build_adaptive_context(intent, clinics, hotels, flights))
            .temperature(temperature)
            .max_tokens(max_tokens);

        let completion = self.brain.complete(request).await?;
        completion
            .content_text()
            .map(str::to_string)
            .ok_or(OrchestratorError::EmptyOutput)
    }
}
