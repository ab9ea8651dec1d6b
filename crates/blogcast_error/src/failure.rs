//! Classification of failed narration attempts.

use crate::{BlogcastError, BlogcastErrorKind, ModelsErrorKind};

/// How the fallback orchestrator should treat a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FailureClass {
    /// The backend hit a rate or request-size limit; another backend may succeed.
    #[display("rate or size limit")]
    RateOrSizeLimit,
    /// Any other failure.
    #[display("other")]
    Other,
}

/// Errors that can say which [`FailureClass`] they belong to.
///
/// # Examples
///
/// ```
/// use blogcast_error::{
///     BlogcastError, ClassifyFailure, FailureClass, GroqErrorKind, ModelsError, ModelsErrorKind,
/// };
///
/// let err: BlogcastError = ModelsError::new(ModelsErrorKind::Groq(
///     GroqErrorKind::RequestTooLarge("TPM 6000, requested 9000".to_string()),
/// ))
/// .into();
///
/// assert_eq!(err.failure_class(), FailureClass::RateOrSizeLimit);
/// assert!(err.is_rate_or_size_limit());
/// ```
pub trait ClassifyFailure {
    /// Classify this failure.
    fn failure_class(&self) -> FailureClass;

    /// Shorthand for `failure_class() == FailureClass::RateOrSizeLimit`.
    fn is_rate_or_size_limit(&self) -> bool {
        self.failure_class() == FailureClass::RateOrSizeLimit
    }
}

impl ClassifyFailure for ModelsErrorKind {
    fn failure_class(&self) -> FailureClass {
        match self {
            ModelsErrorKind::Groq(kind) if kind.is_limit() => FailureClass::RateOrSizeLimit,
            _ => FailureClass::Other,
        }
    }
}

impl ClassifyFailure for BlogcastErrorKind {
    fn failure_class(&self) -> FailureClass {
        match self {
            BlogcastErrorKind::Models(err) => err.kind.failure_class(),
            // Speech quotas are not cured by switching the text backend.
            _ => FailureClass::Other,
        }
    }
}

impl ClassifyFailure for BlogcastError {
    fn failure_class(&self) -> FailureClass {
        self.kind().failure_class()
    }
}
