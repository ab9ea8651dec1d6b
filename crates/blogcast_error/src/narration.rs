//! Narration agent errors.

/// Specific error conditions for a narration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NarrationErrorKind {
    /// The content fetcher reported an error instead of article text
    #[display("Content unavailable: {}", _0)]
    ContentUnavailable(String),
    /// The backend returned no summary text
    #[display("Backend '{}' produced an empty summary", _0)]
    EmptySummary(String),
    /// The whole attempt exceeded its time budget
    #[display("Attempt with '{}' timed out after {}s", candidate, seconds)]
    AttemptTimeout {
        /// Backend candidate identifier
        candidate: String,
        /// Configured attempt budget in seconds
        seconds: u64,
    },
}

/// Narration error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Narration Error: {} at line {} in {}", kind, line, file)]
pub struct NarrationError {
    /// The kind of error that occurred
    pub kind: NarrationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NarrationError {
    /// Create a new narration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NarrationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
