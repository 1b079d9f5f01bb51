//! Emotional and communication-style profile of a user message.

use serde::{Deserialize, Serialize};

/// Dominant emotion detected in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryEmotion {
    Anxious,
    Confused,
    Curious,
    Desperate,
    Excited,
    Frustrated,
    Hopeful,
    Neutral,
    Overwhelmed,
    Scared,
    Skeptical,
    Urgent,
}

/// How involved the user's request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryComplexity {
    /// "Show me clinics"
    Simple,
    /// "I need IVF in Dubai under $5000"
    Moderate,
    /// Multiple requirements, comparisons
    Complex,
}

/// What the user is trying to accomplish overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserIntent {
    Browsing,
    Comparing,
    Deciding,
    InformationSeeking,
    UrgentNeed,
}

/// How personal the topic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

/// Recommended reply tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedTone {
    Casual,
    Professional,
    Reassuring,
    Educational,
    Direct,
    Consultative,
}

/// Full emotion classification of one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionProfile {
    pub primary_emotion: PrimaryEmotion,
    /// 0 (flat) to 10 (overwhelming), inclusive.
    pub emotion_intensity: f32,
    pub query_complexity: QueryComplexity,
    pub user_intent: UserIntent,
    pub sensitivity_level: SensitivityLevel,
    pub requires_empathy: bool,
    pub suggested_tone: SuggestedTone,
}

impl Default for EmotionProfile {
    /// The profile used whenever classification fails or is invalid.
    fn default() -> Self {
        Self {
            primary_emotion: PrimaryEmotion::Neutral,
            emotion_intensity: 5.0,
            query_complexity: QueryComplexity::Moderate,
            user_intent: UserIntent::InformationSeeking,
            sensitivity_level: SensitivityLevel::Medium,
            requires_empathy: false,
            suggested_tone: SuggestedTone::Professional,
        }
    }
}

impl EmotionProfile {
    /// Check the range constraint on intensity; enum fields are checked by serde.
    pub fn validate(&self) -> Result<(), String> {
        if !self.emotion_intensity.is_finite()
            || !(0.0..=10.0).contains(&self.emotion_intensity)
        {
            return Err(format!(
                "emotionIntensity must be within 0-10, got {}",
                self.emotion_intensity
            ));
        }
        Ok(())
    }
}

/// The subset of a profile a keyword heuristic can determine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialEmotion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_emotion: Option<PrimaryEmotion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_complexity: Option<QueryComplexity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_intent: Option<UserIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity_level: Option<SensitivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_empathy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_tone: Option<SuggestedTone>,
}

impl PartialEmotion {
    /// True when no field was determined.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
