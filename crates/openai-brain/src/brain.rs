//! OpenAiBrain implementation.

use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ResponseFormatSpec};
use crate::config::OpenAiBrainConfig;

/// A brain backed by an OpenAI-compatible chat completions endpoint.
///
/// Stateless: every call carries its full prompt, so one instance can serve
/// all pipeline stages and all requests concurrently.
pub struct OpenAiBrain {
    client: Client,
    config: OpenAiBrainConfig,
}

impl OpenAiBrain {
    /// Create a new OpenAiBrain with the given configuration.
    pub fn new(config: OpenAiBrainConfig) -> Result<Self, BrainError> {
        if config.api_key.trim().is_empty() {
            return Err(BrainError::Configuration("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            model = %config.model,
            api_url = %config.api_url,
            "OpenAiBrain initialized"
        );

        Ok(Self { client, config })
    }

    /// Create an OpenAiBrain from environment variables.
    ///
    /// See [`OpenAiBrainConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, BrainError> {
        Self::new(OpenAiBrainConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiBrainConfig {
        &self.config
    }

    /// Translate a pipeline request into the wire body.
    fn build_request(&self, request: CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model.unwrap_or_else(|| self.config.model.clone()),
            messages: request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: ResponseFormatSpec::from_format(request.response_format),
        }
    }
}

#[async_trait]
impl Brain for OpenAiBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        let body = self.build_request(request);
        let url = self.config.completions_url();

        debug!(
            model = %body.model,
            messages = body.messages.len(),
            temperature = ?body.temperature,
            max_tokens = ?body.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BrainError::Timeout
                } else {
                    BrainError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|api_error| api_error.error.message)
                .unwrap_or(error_text);

            return Err(BrainError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        if let Some(usage) = completion.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Token usage"
            );
        }

        let choice = completion.choices.into_iter().next();
        if let Some(reason) = choice.as_ref().and_then(|c| c.finish_reason.as_deref()) {
            debug!(finish_reason = %reason, "Completion finished");
        }

        Ok(Completion {
            content: choice.and_then(|c| c.message.content),
            model: completion.model,
            usage: completion.usage,
        })
    }

    fn name(&self) -> &str {
        "OpenAiBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::ResponseFormat;

    fn test_brain() -> OpenAiBrain {
        let config = OpenAiBrainConfig::builder()
            .api_key("test-key")
            .model("default-model")
            .build();
        OpenAiBrain::new(config).unwrap()
    }

    #[test]
    fn test_empty_key_rejected() {
        let config = OpenAiBrainConfig::builder().api_key("  ").build();
        assert!(matches!(
            OpenAiBrain::new(config),
            Err(BrainError::Configuration(_))
        ));
    }

    #[test]
    fn test_build_request_uses_default_model() {
        let brain = test_brain();
        let request = CompletionRequest::new().system("s").user("u").temperature(0.4);

        let body = brain.build_request(request);
        assert_eq!(body.model, "default-model");
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.temperature, Some(0.4));
        assert!(body.response_format.is_none());
    }

    #[test]
    fn test_build_request_model_override_and_json() {
        let brain = test_brain();
        let request = CompletionRequest::new()
            .user("u")
            .model(Some("override".to_string()))
            .json_object()
            .max_tokens(300);

        let body = brain.build_request(request);
        assert_eq!(body.model, "override");
        assert_eq!(body.max_tokens, Some(300));
        assert_eq!(
            body.response_format,
            ResponseFormatSpec::from_format(ResponseFormat::JsonObject)
        );
    }

    #[test]
    fn test_brain_name() {
        assert_eq!(test_brain().name(), "OpenAiBrain");
    }
}
