//! Concierge pipeline: turns one free-text message into a tone-adapted,
//! compliance-filtered reply plus ranked option cards.
//!
//! # Architecture
//!
//! ```text
//! ChatRequest
//!      ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Validate, assign session id                             │
//! │         ↓                                                   │
//! │  2. Emotion classifier ∥ intent extractor                   │
//! │     (emotion only in adaptive mode)                         │
//! │         ↓                                                   │
//! │  3. Option provider: clinics ∥ hotels? ∥ flights?           │
//! │         ↓                                                   │
//! │  4. Compose (adaptive or standard)                          │
//! │         ↓                                                   │
//! │  5. Policy filter (fail-open)                               │
//! │         ↓                                                   │
//! │  6. Assemble capped, locale-resolved cards                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every model-backed stage absorbs its own failures and substitutes a fixed
//! fallback, so a request only fails on invalid input or a provider error.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::CatalogProvider;
//! use orchestrator::{ChatRequest, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::from_env(CatalogProvider::seeded()?)?;
//!
//!     let response = orchestrator
//!         .process(ChatRequest::new("Dental implants in Istanbul under $2000"))
//!         .await?;
//!
//!     println!("{}", response.message);
//!     Ok(())
//! }
//! ```

mod adaptive;
mod composer;
mod config;
mod context;
mod emotion;
mod error;
mod intent;
mod model_selection;
mod orchestrator;
mod policy;
mod request;
mod response;

// Public exports
pub use adaptive::{
    build_system_prompt, fallback_reply, max_tokens_for, temperature_for, AdaptiveComposer,
    CLARIFY_FALLBACK, EMPATHY_FALLBACK, MAX_HISTORY_TURNS, URGENT_FALLBACK,
};
pub use composer::{
    StandardComposer, STANDARD_EMPTY_REPLY, STANDARD_ERROR_REPLY, STANDARD_SYSTEM_PROMPT,
};
pub use config::{PipelineConfig, PipelineConfigBuilder, DEFAULT_CLINIC_SEARCH_LIMIT};
pub use context::{build_adaptive_context, build_standard_context, MAX_CONTEXT_CLINICS};
pub use emotion::{parse_profile, quick_emotion_check, EmotionClassifier, EMOTION_SYSTEM_PROMPT};
pub use error::OrchestratorError;
pub use intent::{parse_intent, IntentExtractor, INTENT_SYSTEM_PROMPT};
pub use model_selection::StageModels;
pub use orchestrator::{Orchestrator, PipelineStage};
pub use policy::{quick_policy_check, PolicyCheck, PolicyFilter, POLICY_SYSTEM_PROMPT};
pub use request::{ChatRequest, Locale};
pub use response::{
    CardKind, Cards, ClinicCard, FlightCard, HotelCard, PipelineResponse, MAX_CARD_PACKAGES,
    MAX_CLINIC_CARDS, MAX_FLIGHT_CARDS, MAX_HOTEL_CARDS,
};

// Re-export commonly used types from dependencies
pub use brain_core::{Brain, BrainError};
pub use concierge_core::{EmotionProfile, Intent, OptionProvider, ProviderError};
