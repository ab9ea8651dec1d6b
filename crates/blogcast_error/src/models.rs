//! Text-generation backend errors.

/// Groq-specific error conditions.
///
/// The driver translates provider wording (status codes, error codes, message
/// text) into these variants once, so callers never match on strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GroqErrorKind {
    /// Transport failure talking to the API
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned a non-success status not covered by a narrower variant
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },

    /// Requests or tokens per minute/day exhausted for this model
    #[display("Rate limit exceeded: {}", _0)]
    RateLimit(String),

    /// Prompt is larger than the model's per-request token allowance
    #[display("Request too large: {}", _0)]
    RequestTooLarge(String),

    /// Model identifier not known to the provider
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),

    /// Request rejected as malformed or unauthorized
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// Call did not complete within the configured timeout
    #[display("Request timed out after {}s", _0)]
    Timeout(u64),

    /// Request could not be built
    #[display("Request conversion error: {}", _0)]
    RequestConversion(String),

    /// Response could not be decoded
    #[display("Response conversion error: {}", _0)]
    ResponseConversion(String),
}

impl GroqErrorKind {
    /// Whether this error means the model's quota or size allowance was hit.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            GroqErrorKind::RateLimit(_) | GroqErrorKind::RequestTooLarge(_)
        )
    }
}

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
pub enum ModelsErrorKind {
    /// Groq-specific error
    #[display("Groq: {}", _0)]
    Groq(GroqErrorKind),

    /// Backend returned a response with no usable text
    #[from(ignore)]
    #[display("Empty response from {}", _0)]
    EmptyResponse(String),
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use blogcast_error::{GroqErrorKind, ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Groq(GroqErrorKind::RateLimit(
///     "tokens per minute".to_string(),
/// )));
/// assert!(format!("{}", err).contains("Rate limit"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
