//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ModelsError, NarrationError, SpeechError, StorageError,
};

/// Every failure blogcast can report, one variant per concern.
///
/// # Examples
///
/// ```
/// use blogcast_error::{BlogcastError, BlogcastErrorKind, BuilderError};
///
/// let err: BlogcastError = BuilderError::new("generation request", "no messages").into();
/// assert!(matches!(err.kind(), BlogcastErrorKind::Builder(_)));
/// assert!(format!("{}", err).contains("Could not assemble generation request"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BlogcastErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Request body assembly error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Text-generation backend error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Speech synthesis error
    #[from(SpeechError)]
    Speech(SpeechError),
    /// Audio persistence error
    #[from(StorageError)]
    Storage(StorageError),
    /// Narration attempt error
    #[from(NarrationError)]
    Narration(NarrationError),
}

/// Blogcast error with kind discrimination.
///
/// # Examples
///
/// ```
/// use blogcast_error::{BlogcastResult, ConfigError};
///
/// fn might_fail() -> BlogcastResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Blogcast Error: {}", _0)]
pub struct BlogcastError(Box<BlogcastErrorKind>);

impl BlogcastError {
    /// Create a new error from a kind.
    pub fn new(kind: BlogcastErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BlogcastErrorKind {
        &self.0
    }

    /// The failure without wrapper prefixes or source locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogcast_error::{BlogcastError, SpeechError, SpeechErrorKind};
    ///
    /// let err: BlogcastError = SpeechError::new(SpeechErrorKind::EmptyAudio).into();
    /// assert!(!err.user_message().contains(" at line "));
    /// assert!(err.to_string().contains(" at line "));
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            BlogcastErrorKind::Config(e) => e.message.clone(),
            BlogcastErrorKind::Builder(e) => {
                format!("Could not assemble {}: {}", e.target, e.reason)
            }
            BlogcastErrorKind::Models(e) => e.kind.to_string(),
            BlogcastErrorKind::Speech(e) => e.kind.to_string(),
            BlogcastErrorKind::Storage(e) => e.kind.to_string(),
            BlogcastErrorKind::Narration(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to BlogcastErrorKind
impl<T> From<T> for BlogcastError
where
    T: Into<BlogcastErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for blogcast operations.
pub type BlogcastResult<T> = std::result::Result<T, BlogcastError>;
