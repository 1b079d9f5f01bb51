//! Scripted brain implementation - answers by system-prompt marker.

use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};
use tokio::sync::Mutex;

/// What a scripted brain does for a matching call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Return this text.
    Reply(String),
    /// Return a completion with no content.
    Empty,
    /// Fail with `BrainError::ProcessingFailed`.
    Fail(String),
}

/// A brain that picks its answer by looking for a marker in the system prompt.
///
/// Rules are checked in insertion order; the first rule whose marker occurs in
/// the request's system prompt wins. Calls matching no rule get the fallback
/// outcome (`Outcome::Empty` unless changed with [`ScriptedBrain::otherwise`]).
/// Every request is recorded so tests can inspect what each stage sent.
#[derive(Debug, Default)]
pub struct ScriptedBrain {
    rules: Vec<(String, Outcome)>,
    fallback: Option<Outcome>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBrain {
    /// Create a brain with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule.
    pub fn on(mut self, marker: impl Into<String>, outcome: Outcome) -> Self {
        self.rules.push((marker.into(), outcome));
        self
    }

    /// Reply with `text` when the system prompt contains `marker`.
    pub fn reply(self, marker: impl Into<String>, text: impl Into<String>) -> Self {
        self.on(marker, Outcome::Reply(text.into()))
    }

    /// Fail when the system prompt contains `marker`.
    pub fn fail(self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        let reason = format!("scripted failure for '{}'", marker);
        self.on(marker, Outcome::Fail(reason))
    }

    /// Return empty content when the system prompt contains `marker`.
    pub fn empty(self, marker: impl Into<String>) -> Self {
        self.on(marker, Outcome::Empty)
    }

    /// Outcome for calls matching no rule.
    pub fn otherwise(mut self, outcome: Outcome) -> Self {
        self.fallback = Some(outcome);
        self
    }

    /// All recorded requests, in call order.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    /// Recorded requests whose system prompt contains `marker`.
    pub async fn requests_matching(&self, marker: &str) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| r.system_prompt().unwrap_or_default().contains(marker))
            .cloned()
            .collect()
    }

    /// Number of calls made so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    fn outcome_for(&self, request: &CompletionRequest) -> Outcome {
        let system = request.system_prompt().unwrap_or_default();
        self.rules
            .iter()
            .find(|(marker, _)| system.contains(marker.as_str()))
            .map(|(_, outcome)| outcome.clone())
            .or_else(|| self.fallback.clone())
            .unwrap_or(Outcome::Empty)
    }
}

#[async_trait]
impl Brain for ScriptedBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        let outcome = self.outcome_for(&request);
        self.requests.lock().await.push(request);

        match outcome {
            Outcome::Reply(text) => Ok(Completion::text(text)),
            Outcome::Empty => Ok(Completion::empty()),
            Outcome::Fail(reason) => Err(BrainError::ProcessingFailed(reason)),
        }
    }

    fn name(&self) -> &str {
        "ScriptedBrain"
    }
}
