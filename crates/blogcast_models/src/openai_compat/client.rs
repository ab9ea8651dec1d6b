//! HTTP client for OpenAI-compatible chat completions.

use super::dto::ErrorEnvelope;
use super::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAICompatError};
use crate::LlmMetrics;
use blogcast_core::{GenerateRequest, GenerateResponse, TokenUsage};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, instrument, warn};

/// Client for any provider exposing `/chat/completions` in the OpenAI shape.
#[derive(Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    provider: &'static str,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAICompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICompatibleClient")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("provider", &self.provider)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAICompatibleClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token for the provider
    /// * `model` - Model identifier sent with every request
    /// * `endpoint` - Full chat completions URL
    /// * `provider` - Provider name used in logs and metrics
    /// * `timeout` - Upper bound on one HTTP call
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        provider: &'static str,
        timeout: Duration,
    ) -> Self {
        debug!(provider, "Creating OpenAI-compatible client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            provider,
            timeout,
        }
    }

    /// Model identifier.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Provider name.
    pub fn provider_name(&self) -> &'static str {
        self.provider
    }

    /// Endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn convert_request(
        &self,
        request: &GenerateRequest,
    ) -> Result<ChatCompletionRequest, OpenAICompatError> {
        let messages = request
            .messages()
            .iter()
            .map(|m| {
                ChatMessage::builder()
                    .role(m.role().to_string())
                    .content(m.content().clone())
                    .build()
                    .map_err(|e| OpenAICompatError::Builder(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        ChatCompletionRequest::builder()
            .model(self.model.clone())
            .messages(messages)
            .max_tokens(*request.max_tokens())
            .temperature(*request.temperature())
            .build()
            .map_err(|e| OpenAICompatError::Builder(e.to_string()))
    }

    /// Sends a chat completions request.
    ///
    /// # Errors
    ///
    /// Non-success statuses are classified by [`OpenAICompatError::from_status`].
    #[instrument(skip(self, request), fields(provider = self.provider, model = %self.model))]
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, OpenAICompatError> {
        let started = Instant::now();
        let result = self.send(request).await;

        LlmMetrics::get().record_call(
            self.provider,
            &self.model,
            started.elapsed(),
            result.as_ref().map(|r| r.usage().as_ref()),
        );

        result
    }

    async fn send(&self, request: &GenerateRequest) -> Result<GenerateResponse, OpenAICompatError> {
        let body = self.convert_request(request)?;
        debug!(messages = body.messages().len(), "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!(timeout_secs = self.timeout.as_secs(), "Chat completion timed out");
                    OpenAICompatError::Timeout(self.timeout.as_secs())
                } else {
                    error!(error = ?e, "Failed to send chat completion request");
                    OpenAICompatError::Http(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<ErrorEnvelope>(&raw) {
                Ok(envelope) => (
                    envelope.error.code,
                    envelope.error.message.unwrap_or_else(|| raw.clone()),
                ),
                Err(_) => (None, raw),
            };
            error!(status = %status, code = ?code, message = %message, "Chat completion returned error");
            return Err(OpenAICompatError::from_status(
                status.as_u16(),
                code.as_deref(),
                message,
            ));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                OpenAICompatError::Timeout(self.timeout.as_secs())
            } else {
                error!(error = ?e, "Failed to parse chat completion response");
                OpenAICompatError::ResponseParsing(e.to_string())
            }
        })?;

        let text = parsed
            .first_text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| OpenAICompatError::EmptyResponse(self.model.clone()))?
            .to_string();

        let usage = parsed.usage().map(|u| {
            TokenUsage::new(*u.prompt_tokens(), *u.completion_tokens(), *u.total_tokens())
        });

        debug!(chars = text.chars().count(), "Received chat completion");
        Ok(GenerateResponse::new(text, usage))
    }
}
