//! Emotion classifier: heuristic pre-check plus model-backed classification.

use std::sync::Arc;

use brain_core::{extract_json, short_fingerprint, Brain, CompletionRequest};
use concierge_core::{
    EmotionProfile, PartialEmotion, PrimaryEmotion, QueryComplexity, SensitivityLevel,
    SuggestedTone, UserIntent,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::OrchestratorError;

/// System prompt for emotion classification.
pub const EMOTION_SYSTEM_PROMPT: &str = r#"You analyze the emotional state and communication needs of people asking a medical travel concierge for help.

Your analysis decides how the reply will be written. Consider:
- Emotional tone and how strong it is
- Urgency or anxiety
- How personal or sensitive the topic is
- Which communication style would help most

Pick up on subtle cues, for example:
- "I'm worried..." means anxious and needs reassurance
- "Just looking..." means browsing and a casual tone
- "I need this ASAP..." means urgent and a direct tone
- "Can you explain..." means curious and an educational tone
- "I've been trying..." means frustrated and needs empathy

Respond with a single JSON object with exactly these fields:
- "primaryEmotion": one of "anxious", "confused", "curious", "desperate", "excited", "frustrated", "hopeful", "neutral", "overwhelmed", "scared", "skeptical", "urgent"
- "emotionIntensity": number from 0 to 10
- "queryComplexity": one of "simple", "moderate", "complex"
- "userIntent": one of "browsing", "comparing", "deciding", "information_seeking", "urgent_need"
- "sensitivityLevel": one of "low", "medium", "high"
- "requiresEmpathy": true or false
- "suggestedTone": one of "casual", "professional", "reassuring", "educational", "direct", "consultative"

Respond with JSON only."#;

/// Sampling temperature for classification.
pub const EMOTION_TEMPERATURE: f32 = 0.3;

static ANXIETY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)worried|anxious|nervous|scared|afraid|concern").expect("valid regex"));
static URGENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)urgent|asap|quickly|soon|emergency|need help").expect("valid regex"));
static CONFUSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)confused|don't understand|explain|what does|how does").expect("valid regex"));
static EXCITEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)excited|can't wait|amazing|perfect|great").expect("valid regex"));
static BROWSING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)just looking|browsing|exploring|checking out|show me").expect("valid regex"));

/// Keyword heuristic over five families, checked in priority order
/// (anxiety, urgency, confusion, excitement, browsing). Returns the fields
/// the first matching family determines, or an empty partial.
pub fn quick_emotion_check(text: &str) -> PartialEmotion {
    let text = text.to_lowercase();

    if ANXIETY.is_match(&text) {
        return PartialEmotion {
            primary_emotion: Some(PrimaryEmotion::Anxious),
            requires_empathy: Some(true),
            suggested_tone: Some(SuggestedTone::Reassuring),
            sensitivity_level: Some(SensitivityLevel::High),
            ..Default::default()
        };
    }

    if URGENCY.is_match(&text) {
        return PartialEmotion {
            primary_emotion: Some(PrimaryEmotion::Urgent),
            user_intent: Some(UserIntent::UrgentNeed),
            suggested_tone: Some(SuggestedTone::Direct),
            ..Default::default()
        };
    }

    if CONFUSION.is_match(&text) {
        return PartialEmotion {
            primary_emotion: Some(PrimaryEmotion::Confused),
            suggested_tone: Some(SuggestedTone::Educational),
            user_intent: Some(UserIntent::InformationSeeking),
            ..Default::default()
        };
    }

    if EXCITEMENT.is_match(&text) {
        return PartialEmotion {
            primary_emotion: Some(PrimaryEmotion::Excited),
            suggested_tone: Some(SuggestedTone::Casual),
            requires_empathy: Some(false),
            ..Default::default()
        };
    }

    if BROWSING.is_match(&text) {
        return PartialEmotion {
            user_intent: Some(UserIntent::Browsing),
            suggested_tone: Some(SuggestedTone::Casual),
            query_complexity: Some(QueryComplexity::Simple),
            ..Default::default()
        };
    }

    PartialEmotion::default()
}

/// Model-backed emotion classifier.
///
/// [`EmotionClassifier::classify`] never fails: any transport, parse or
/// validation problem yields [`EmotionProfile::default`].
pub struct EmotionClassifier {
    brain: Arc<dyn Brain>,
    model: Option<String>,
}

impl EmotionClassifier {
    /// Create a classifier over the given brain.
    pub fn new(brain: Arc<dyn Brain>, model: Option<String>) -> Self {
        info!(
            fingerprint = %short_fingerprint(EMOTION_SYSTEM_PROMPT),
            model = ?model,
            "Emotion classifier ready"
        );
        Self { brain, model }
    }

    /// Classify a message.
    pub async fn classify(&self, text: &str) -> EmotionProfile {
        match self.try_classify(text).await {
            Ok(profile) => {
                debug!(profile = ?profile, "Emotion classified");
                profile
            }
            Err(e) => {
                warn!(stage = "emotion", error = %e, "Emotion classification failed, using default profile");
                EmotionProfile::default()
            }
        }
    }

    async fn try_classify(&self, text: &str) -> Result<EmotionProfile, OrchestratorError> {
        let request = CompletionRequest::new()
            .model(self.model.clone())
            .system(EMOTION_SYSTEM_PROMPT)
            .user(format!("Analyze this message:\n\n\"{}\"", text))
            .temperature(EMOTION_TEMPERATURE)
            .json_object();

        let completion = self.brain.complete(request).await?;
        let content = completion
            .content_text()
            .ok_or(OrchestratorError::EmptyOutput)?;
        parse_profile(content)
    }
}

/// Parse and validate a model-produced profile.
pub fn parse_profile(content: &str) -> Result<EmotionProfile, OrchestratorError> {
    let json = extract_json(content);
    let profile: EmotionProfile = serde_json::from_str(json)
        .map_err(|e| OrchestratorError::InvalidOutput(format!("emotion profile: {}", e)))?;
    profile
        .validate()
        .map_err(OrchestratorError::InvalidOutput)?;
    Ok(profile)
}
