//! Pipeline orchestrator: sequences the stages behind a single chat request.

use std::fmt;
use std::sync::Arc;

use brain_core::Brain;
use concierge_core::{EmotionProfile, FlightQuery, HotelQuery, OptionProvider};
use openai_brain::OpenAiBrain;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::adaptive::AdaptiveComposer;
use crate::composer::StandardComposer;
use crate::config::PipelineConfig;
use crate::emotion::{quick_emotion_check, EmotionClassifier};
use crate::error::OrchestratorError;
use crate::intent::IntentExtractor;
use crate::policy::{quick_policy_check, PolicyFilter};
use crate::request::ChatRequest;
use crate::response::{localize_clinics, Cards, PipelineResponse};

/// Observable pipeline states, used as the `stage` field in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    EmotionClassified,
    IntentExtracted,
    OptionsFetched,
    Composed,
    Filtered,
    Responded,
    /// Terminal failure state.
    Errored,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Received => "received",
            PipelineStage::EmotionClassified => "emotion_classified",
            PipelineStage::IntentExtracted => "intent_extracted",
            PipelineStage::OptionsFetched => "options_fetched",
            PipelineStage::Composed => "composed",
            PipelineStage::Filtered => "filtered",
            PipelineStage::Responded => "responded",
            PipelineStage::Errored => "errored",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coordinates emotion and intent analysis, option lookup, composition and
/// policy filtering for one request at a time.
///
/// Holds no per-request state, so one instance can serve concurrent requests.
pub struct Orchestrator<P: OptionProvider> {
    emotion: EmotionClassifier,
    intent: IntentExtractor,
    standard: StandardComposer,
    adaptive: AdaptiveComposer,
    policy: PolicyFilter,
    provider: P,
    config: PipelineConfig,
}

impl<P: OptionProvider> Orchestrator<P> {
    /// Create an orchestrator where every stage shares one brain.
    pub fn new(brain: Arc<dyn Brain>, provider: P, config: PipelineConfig) -> Self {
        let models = &config.models;
        info!(
            brain = brain.name(),
            provider = provider.name(),
            clinic_search_limit = config.clinic_search_limit,
            "Creating orchestrator"
        );

        Self {
            emotion: EmotionClassifier::new(brain.clone(), models.emotion.clone()),
            intent: IntentExtractor::new(brain.clone(), models.intent.clone()),
            standard: StandardComposer::new(brain.clone(), models.composer.clone()),
            adaptive: AdaptiveComposer::new(brain.clone(), models.composer.clone()),
            policy: PolicyFilter::new(brain, models.policy.clone()),
            provider,
            config,
        }
    }

    /// Create an orchestrator backed by an OpenAI-compatible endpoint.
    ///
    /// See [`openai_brain::OpenAiBrainConfig::from_env`] and
    /// [`PipelineConfig::from_env`] for the variables read.
    pub fn from_env(provider: P) -> Result<Self, OrchestratorError> {
        let brain = OpenAiBrain::from_env()?;
        Ok(Self::new(Arc::new(brain), provider, PipelineConfig::from_env()))
    }

    /// The active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The option provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run a request through the pipeline.
    ///
    /// Model failures are absorbed by each stage. Only an invalid request or
    /// a provider failure produces an error.
    pub async fn process(&self, request: ChatRequest) -> Result<PipelineResponse, OrchestratorError> {
        let session_id = request
            .session_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("session_{}", Uuid::new_v4().simple()));

        match self.run(request, &session_id).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(
                    session_id = %session_id,
                    stage = %PipelineStage::Errored,
                    error = %e,
                    "Pipeline failed"
                );
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        request: ChatRequest,
        session_id: &str,
    ) -> Result<PipelineResponse, OrchestratorError> {
        request.validate()?;
        info!(
            session_id = %session_id,
            stage = %PipelineStage::Received,
            adaptive = request.use_adaptive_mode,
            locale = ?request.locale,
            history_turns = request.conversation_history.len(),
            "Request received"
        );

        let message = request.message.as_str();
        let (intent, emotion): (_, Option<EmotionProfile>) = if request.use_adaptive_mode {
            let hint = quick_emotion_check(message);
            if !hint.is_empty() {
                debug!(session_id = %session_id, hint = ?hint, "Heuristic emotion hint");
            }

            let (emotion, intent) =
                tokio::join!(self.emotion.classify(message), self.intent.extract(message));
            info!(
                session_id = %session_id,
                stage = %PipelineStage::EmotionClassified,
                emotion = ?emotion.primary_emotion,
                tone = ?emotion.suggested_tone,
                "Emotion classified"
            );
            (intent, Some(emotion))
        } else {
            (self.intent.extract(message).await, None)
        };
        info!(
            session_id = %session_id,
            stage = %PipelineStage::IntentExtracted,
            procedure = intent.procedure_or_default(),
            category = ?intent.category,
            "Intent extracted"
        );

        let hotel_query = HotelQuery::from_intent(&intent);
        let flight_query = FlightQuery::from_intent(&intent);
        let (clinics, hotels, flights) = tokio::try_join!(
            self.provider
                .search_clinics(&intent, self.config.clinic_search_limit),
            async {
                match &hotel_query {
                    Some(query) => self.provider.search_hotels(query).await.map(Some),
                    None => Ok(None),
                }
            },
            async {
                match &flight_query {
                    Some(query) => self.provider.search_flights(query).await.map(Some),
                    None => Ok(None),
                }
            }
        )?;
        let clinics = localize_clinics(clinics, request.locale);
        info!(
            session_id = %session_id,
            stage = %PipelineStage::OptionsFetched,
            clinics = clinics.len(),
            hotels = hotels.as_ref().map(Vec::len),
            flights = flights.as_ref().map(Vec::len),
            "Options fetched"
        );

        let hotel_slice = hotels.as_deref().unwrap_or_default();
        let flight_slice = flights.as_deref().unwrap_or_default();
        let composed = match &emotion {
            Some(profile) => {
                self.adaptive
                    .compose(
                        &intent,
                        profile,
                        &clinics,
                        hotel_slice,
                        flight_slice,
                        &request.conversation_history,
                    )
                    .await
            }
            None => {
                self.standard
                    .compose(&intent, &clinics, hotel_slice, flight_slice)
                    .await
            }
        };
        info!(
            session_id = %session_id,
            stage = %PipelineStage::Composed,
            chars = composed.len(),
            "Reply composed"
        );

        let check = quick_policy_check(&composed);
        if !check.is_valid {
            debug!(session_id = %session_id, reason = ?check.reason, "Heuristic policy flag");
        }
        let message = self.policy.filter(&composed).await;
        info!(
            session_id = %session_id,
            stage = %PipelineStage::Filtered,
            rewritten = message != composed,
            "Reply filtered"
        );

        let cards = Cards::assemble(&clinics, hotels.as_deref(), flights.as_deref());
        info!(
            session_id = %session_id,
            stage = %PipelineStage::Responded,
            clinic_cards = cards.clinics.len(),
            "Response assembled"
        );

        Ok(PipelineResponse {
            message,
            intent,
            emotion_analysis: emotion,
            cards,
            session_id: session_id.to_string(),
        })
    }
}
