//! Pipeline configuration.

use std::env;

use crate::model_selection::StageModels;

/// Default number of clinics requested from the provider.
pub const DEFAULT_CLINIC_SEARCH_LIMIT: usize = 10;

/// Configuration for the [`crate::Orchestrator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Clinics requested per search.
    pub clinic_search_limit: usize,
    /// Per-stage model overrides.
    pub models: StageModels,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            clinic_search_limit: DEFAULT_CLINIC_SEARCH_LIMIT,
            models: StageModels::default(),
        }
    }
}

impl PipelineConfig {
    /// Create configuration from environment variables.
    ///
    /// - `CLINIC_SEARCH_LIMIT` - Clinics per search (default: 10)
    /// - Stage model variables, see [`StageModels::from_env`]
    pub fn from_env() -> Self {
        let clinic_search_limit = env::var("CLINIC_SEARCH_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|limit: &usize| *limit > 0)
            .unwrap_or(DEFAULT_CLINIC_SEARCH_LIMIT);

        Self {
            clinic_search_limit,
            models: StageModels::from_env(),
        }
    }

    /// Create a new config builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Set the clinic search limit.
    pub fn clinic_search_limit(mut self, limit: usize) -> Self {
        self.config.clinic_search_limit = limit;
        self
    }

    /// Set the per-stage models.
    pub fn models(mut self, models: StageModels) -> Self {
        self.config.models = models;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}
