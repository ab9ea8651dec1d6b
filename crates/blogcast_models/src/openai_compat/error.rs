//! Failures reported by OpenAI-compatible endpoints.

/// Error conditions of an OpenAI-compatible API call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum OpenAICompatError {
    /// Transport failure
    #[display("HTTP error: {}", _0)]
    Http(#[error(not(source))] String),

    /// Non-success status without a narrower meaning
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Provider message or raw body
        message: String,
    },

    /// Request or token quota exhausted
    #[display("Rate limit exceeded: {}", _0)]
    RateLimit(#[error(not(source))] String),

    /// Prompt exceeds the per-request allowance
    #[display("Request too large: {}", _0)]
    RequestTooLarge(#[error(not(source))] String),

    /// Unknown model
    #[display("Model not found: {}", _0)]
    ModelNotFound(#[error(not(source))] String),

    /// Malformed or unauthorized request
    #[display("Invalid request: {}", _0)]
    InvalidRequest(#[error(not(source))] String),

    /// No response within the timeout, in seconds
    #[display("Timed out after {}s", _0)]
    Timeout(#[error(not(source))] u64),

    /// Response body could not be decoded
    #[display("Response parsing error: {}", _0)]
    ResponseParsing(#[error(not(source))] String),

    /// Response decoded but carried no text
    #[display("Empty response from model {}", _0)]
    EmptyResponse(#[error(not(source))] String),

    /// Request could not be assembled
    #[display("Builder error: {}", _0)]
    Builder(#[error(not(source))] String),
}

impl OpenAICompatError {
    /// Whether the provider refused the call for quota or request size.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            OpenAICompatError::RateLimit(_) | OpenAICompatError::RequestTooLarge(_)
        )
    }

    /// Short label used when recording error metrics.
    pub fn metric_label(&self) -> &'static str {
        match self {
            OpenAICompatError::Http(_) => "network",
            OpenAICompatError::Api { .. } => "api",
            OpenAICompatError::RateLimit(_) => "rate_limit",
            OpenAICompatError::RequestTooLarge(_) => "request_too_large",
            OpenAICompatError::ModelNotFound(_) => "model_not_found",
            OpenAICompatError::InvalidRequest(_) => "invalid_request",
            OpenAICompatError::Timeout(_) => "timeout",
            OpenAICompatError::ResponseParsing(_) => "parse",
            OpenAICompatError::EmptyResponse(_) => "empty_response",
            OpenAICompatError::Builder(_) => "builder",
        }
    }

    /// Classify a non-success response.
    ///
    /// Status codes decide first; the provider's error code and message
    /// wording are consulted for statuses that are ambiguous on their own.
    pub fn from_status(status: u16, code: Option<&str>, message: String) -> Self {
        let mentions_too_large = message.to_lowercase().contains("request too large");
        match status {
            413 => OpenAICompatError::RequestTooLarge(message),
            _ if mentions_too_large => OpenAICompatError::RequestTooLarge(message),
            429 => OpenAICompatError::RateLimit(message),
            _ if code == Some("rate_limit_exceeded") => OpenAICompatError::RateLimit(message),
            404 => OpenAICompatError::ModelNotFound(message),
            _ if code == Some("model_not_found") => OpenAICompatError::ModelNotFound(message),
            400 | 401 | 403 | 422 => OpenAICompatError::InvalidRequest(message),
            _ => OpenAICompatError::Api { status, message },
        }
    }
}
