//! Request and response types for a single generation call.

use serde::{Deserialize, Serialize};

/// A single message in a chat-style prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user" or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Output format requested from the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Free text.
    #[default]
    Text,
    /// A single JSON object (structured output).
    JsonObject,
}

/// A single generation call.
///
/// Built with the chained helpers below:
///
/// ```rust
/// use brain_core::CompletionRequest;
///
/// let request = CompletionRequest::new()
///     .system("You are terse.")
///     .user("Say hi")
///     .temperature(0.2)
///     .max_tokens(16);
///
/// assert_eq!(request.system_prompt(), Some("You are terse."));
/// assert_eq!(request.messages.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionRequest {
    /// Model override; `None` uses the backend's configured model.
    pub model: Option<String>,
    /// Prompt messages in order.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Output length budget in tokens.
    pub max_tokens: Option<u32>,
    /// Requested output format.
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system message.
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::system(content));
        self
    }

    /// Append a user message.
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage::user(content));
        self
    }

    /// Append prior conversation messages, preserving their order.
    pub fn history(mut self, messages: impl IntoIterator<Item = ChatMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the output length budget.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Request a JSON object response.
    pub fn json_object(mut self) -> Self {
        self.response_format = ResponseFormat::JsonObject;
        self
    }

    /// Override the model for this call. `None` keeps the backend default.
    pub fn model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    /// The first system message, if any.
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "system")
            .map(|m| m.content.as_str())
    }

    /// The last user message, if any.
    pub fn last_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

/// Token usage information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// Result of a generation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Completion {
    /// Generated content; `None` when the model returned nothing.
    pub content: Option<String>,
    /// Model that served the call, if reported.
    pub model: Option<String>,
    /// Token usage, if reported.
    pub usage: Option<Usage>,
}

impl Completion {
    /// A completion carrying the given text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// A completion with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Trimmed content, or `None` if missing or blank.
    pub fn content_text(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
