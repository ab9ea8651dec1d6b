//! Content fetch results.

use serde::{Deserialize, Serialize};

/// Prefix every fetch failure message starts with.
pub const FETCH_ERROR_PREFIX: &str = "Error:";

/// Outcome of fetching a page: either article text or an `"Error: ..."` message.
///
/// Fetch failures are values rather than errors so that downstream code can
/// reason over the text; use [`FetchResult::is_error`] to tell them apart.
///
/// # Examples
///
/// ```
/// use blogcast_core::FetchResult;
///
/// let ok = FetchResult::content("# Title\n\nBody");
/// assert!(!ok.is_error());
///
/// let failed = FetchResult::error("Request failed - connection refused");
/// assert!(failed.is_error());
/// assert_eq!(failed.as_str(), "Error: Request failed - connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct FetchResult(String);

impl FetchResult {
    /// Wrap extracted page content.
    pub fn content(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build an error result; the message is prefixed with `"Error: "`.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self(format!("{} {}", FETCH_ERROR_PREFIX, message))
    }

    /// Whether this result reports a failure.
    pub fn is_error(&self) -> bool {
        self.0.starts_with(FETCH_ERROR_PREFIX)
    }

    /// The content or error text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume into the underlying string.
    pub fn into_inner(self) -> String {
        self.0
    }
}
