//! Failures assembling an outbound request body.

/// A request body could not be assembled from its parts.
///
/// # Examples
///
/// ```
/// use blogcast_error::BuilderError;
///
/// let err = BuilderError::new("synthesis request", "`text` must be initialized");
/// assert_eq!(err.target, "synthesis request");
/// assert!(err.to_string().starts_with("Could not assemble synthesis request"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Could not assemble {}: {} at line {} in {}", target, reason, line, file)]
pub struct BuilderError {
    /// What was being assembled
    pub target: &'static str,
    /// Why assembly failed
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BuilderError {
    /// Record a failure to assemble `target`.
    #[track_caller]
    pub fn new(target: &'static str, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            target,
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
