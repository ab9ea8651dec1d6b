//! Groq AI LPU Inference API driver using the OpenAI-compatible client.

use crate::openai_compat::{OpenAICompatError, OpenAICompatibleClient};
use async_trait::async_trait;
use blogcast_core::{BackendCandidate, GenerateRequest, GenerateResponse, GenerationConfig};
use blogcast_error::{BlogcastResult, GroqErrorKind, ModelsError, ModelsErrorKind, ModelsResult};
use blogcast_interface::{BlogcastDriver, DriverFactory};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Groq AI LPU Inference API driver.
#[derive(Debug, Clone)]
pub struct GroqDriver {
    inner: OpenAICompatibleClient,
}

impl GroqDriver {
    /// Creates a new Groq driver with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank.
    #[instrument(skip(api_key), fields(model = %model))]
    pub fn with_api_key(api_key: String, model: String) -> ModelsResult<Self> {
        Self::with_endpoint(api_key, model, GROQ_API_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Creates a new Groq driver against a specific endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank.
    #[instrument(skip(api_key), fields(model = %model, endpoint = %endpoint))]
    pub fn with_endpoint(
        api_key: String,
        model: String,
        endpoint: String,
        timeout: Duration,
    ) -> ModelsResult<Self> {
        if api_key.trim().is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::Groq(
                GroqErrorKind::InvalidRequest("Groq API key not provided".to_string()),
            )));
        }

        let inner = OpenAICompatibleClient::new(api_key, model, endpoint, "groq", timeout);
        Ok(Self { inner })
    }

    /// Converts OpenAICompatError to a Groq-specific error.
    fn convert_error(error: OpenAICompatError) -> ModelsError {
        let kind = match error {
            OpenAICompatError::Http(msg) => GroqErrorKind::Http(msg),
            OpenAICompatError::Api { status, message } => GroqErrorKind::Api { status, message },
            OpenAICompatError::RateLimit(msg) => GroqErrorKind::RateLimit(msg),
            OpenAICompatError::RequestTooLarge(msg) => GroqErrorKind::RequestTooLarge(msg),
            OpenAICompatError::ModelNotFound(model) => GroqErrorKind::ModelNotFound(model),
            OpenAICompatError::InvalidRequest(msg) => GroqErrorKind::InvalidRequest(msg),
            OpenAICompatError::Timeout(secs) => GroqErrorKind::Timeout(secs),
            OpenAICompatError::ResponseParsing(msg) => GroqErrorKind::ResponseConversion(msg),
            OpenAICompatError::EmptyResponse(model) => {
                return ModelsError::new(ModelsErrorKind::EmptyResponse(model));
            }
            OpenAICompatError::Builder(msg) => {
                GroqErrorKind::RequestConversion(format!("Builder error: {}", msg))
            }
        };

        ModelsError::new(ModelsErrorKind::Groq(kind))
    }
}

#[async_trait]
impl BlogcastDriver for GroqDriver {
    #[instrument(skip(self, req), fields(provider = "groq", model = %self.inner.model_name()))]
    async fn generate(&self, req: &GenerateRequest) -> BlogcastResult<GenerateResponse> {
        self.inner
            .generate(req)
            .await
            .map_err(|e| Self::convert_error(e).into())
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

/// Builds a [`GroqDriver`] per candidate from one key and endpoint.
#[derive(Clone)]
pub struct GroqDriverFactory {
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl std::fmt::Debug for GroqDriverFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqDriverFactory")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GroqDriverFactory {
    /// Creates a factory from an API key and generation settings.
    pub fn new(api_key: impl Into<String>, config: &GenerationConfig) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: config.endpoint().clone(),
            timeout: config.timeout(),
        }
    }
}

impl DriverFactory for GroqDriverFactory {
    fn build(&self, candidate: &BackendCandidate) -> BlogcastResult<Arc<dyn BlogcastDriver>> {
        debug!(model = %candidate.id(), "Building Groq driver");
        let driver = GroqDriver::with_endpoint(
            self.api_key.clone(),
            candidate.id().clone(),
            self.endpoint.clone(),
            self.timeout,
        )?;
        Ok(Arc::new(driver))
    }
}
