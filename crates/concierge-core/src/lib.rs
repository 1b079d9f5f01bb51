//! Shared domain types for the medical travel concierge.
//!
//! - [`Intent`] - What the user wants (procedure, destination, budget, logistics)
//! - [`EmotionProfile`] - How the user feels and how to talk to them
//! - [`Clinic`], [`Hotel`], [`Flight`] - Option records returned by providers
//! - [`OptionProvider`] - Contract for clinic/hotel/flight search backends
//! - [`ConversationTurn`] - Prior chat turns supplied by the client
//!
//! All wire-facing types serialize with camelCase field names.

mod conversation;
mod emotion;
mod intent;
mod options;
mod provider;
mod serde_util;

pub use conversation::{ConversationTurn, Role};
pub use emotion::{
    EmotionProfile, PartialEmotion, PrimaryEmotion, QueryComplexity, SensitivityLevel,
    SuggestedTone, UserIntent,
};
pub use intent::{Category, Intent};
pub use options::{Clinic, Flight, FlightEndpoint, FlightQuery, Hotel, HotelQuery, Package};
pub use provider::{OptionProvider, ProviderError};

// Re-export async_trait for provider implementations
pub use async_trait::async_trait;
