//! Speech synthesis errors.

/// Speech synthesis error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SpeechErrorKind {
    /// Transport failure talking to the synthesis API
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Synthesis API returned a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Synthesis did not complete within the configured timeout
    #[display("Speech synthesis timed out after {}s", _0)]
    Timeout(u64),

    /// Nothing to synthesize
    #[display("Cannot synthesize empty text")]
    EmptyText,

    /// Synthesis returned no audio bytes
    #[display("Synthesis returned no audio")]
    EmptyAudio,

    /// Returned audio could not be framed or encoded
    #[display("Audio encoding failed: {}", _0)]
    Encoding(String),
}

/// Speech synthesis error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Speech Error: {} at line {} in {}", kind, line, file)]
pub struct SpeechError {
    /// The kind of error that occurred
    pub kind: SpeechErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SpeechError {
    /// Create a new speech error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SpeechErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
