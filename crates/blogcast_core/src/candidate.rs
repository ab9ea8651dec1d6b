//! Text-generation backend candidates and their ordering.

use blogcast_error::{BlogcastResult, ConfigError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// One selectable text-generation backend.
///
/// # Examples
///
/// ```
/// use blogcast_core::BackendCandidate;
///
/// let candidate = BackendCandidate::new("llama-3.1-8b-instant", "Llama 3.1 8B (Fastest)");
/// assert_eq!(candidate.id(), "llama-3.1-8b-instant");
/// assert_eq!(format!("{}", candidate), "Llama 3.1 8B (Fastest) [llama-3.1-8b-instant]");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_more::Display,
)]
#[display("{} [{}]", label, id)]
pub struct BackendCandidate {
    /// Provider model identifier
    id: String,
    /// Human-readable label
    label: String,
}

impl BackendCandidate {
    /// Create a candidate from an identifier and a label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The configured, ordered set of backend candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateCatalog(Vec<BackendCandidate>);

impl CandidateCatalog {
    /// Create a catalog from an ordered list of candidates.
    pub fn new(candidates: Vec<BackendCandidate>) -> Self {
        Self(candidates)
    }

    /// Candidates in configured order.
    pub fn candidates(&self) -> &[BackendCandidate] {
        &self.0
    }

    /// Look up a candidate by identifier.
    pub fn find(&self, id: &str) -> Option<&BackendCandidate> {
        self.0.iter().find(|c| c.id == id)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First identifier that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .map(|c| c.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    /// Sequence of candidates to try for one run.
    ///
    /// With fallback enabled the selected candidate comes first and the rest
    /// keep their configured relative order. Each identifier appears at most
    /// once. With fallback disabled only the selected candidate is returned.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `selected` is not in the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogcast_core::{BackendCandidate, CandidateCatalog};
    ///
    /// let catalog = CandidateCatalog::new(vec![
    ///     BackendCandidate::new("a", "A"),
    ///     BackendCandidate::new("b", "B"),
    ///     BackendCandidate::new("c", "C"),
    /// ]);
    ///
    /// let order = catalog.ordered_for("c", true).unwrap();
    /// let ids: Vec<_> = order.iter().map(|c| c.id().as_str()).collect();
    /// assert_eq!(ids, vec!["c", "a", "b"]);
    ///
    /// let solo = catalog.ordered_for("b", false).unwrap();
    /// assert_eq!(solo.len(), 1);
    /// ```
    #[instrument(skip(self), fields(catalog_len = self.0.len()))]
    pub fn ordered_for(
        &self,
        selected: &str,
        fallback: bool,
    ) -> BlogcastResult<Vec<BackendCandidate>> {
        let primary = self.find(selected).cloned().ok_or_else(|| {
            ConfigError::new(format!(
                "Unknown model '{}'; expected one of: {}",
                selected,
                self.0
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        if !fallback {
            debug!(model = %primary.id, "Fallback disabled, single candidate");
            return Ok(vec![primary]);
        }

        let mut seen = HashSet::with_capacity(self.0.len());
        seen.insert(selected);
        let mut ordered = Vec::with_capacity(self.0.len());
        ordered.push(primary);
        ordered.extend(
            self.0
                .iter()
                .filter(|c| seen.insert(c.id.as_str()))
                .cloned(),
        );

        debug!(count = ordered.len(), "Candidate order resolved");
        Ok(ordered)
    }
}

impl Default for CandidateCatalog {
    fn default() -> Self {
        Self(vec![
            BackendCandidate::new("llama-3.3-70b-versatile", "Llama 3.3 70B (Most capable)"),
            BackendCandidate::new("llama-3.1-8b-instant", "Llama 3.1 8B (Fastest)"),
            BackendCandidate::new("openai/gpt-oss-120b", "GPT-OSS 120B (Large)"),
            BackendCandidate::new("openai/gpt-oss-20b", "GPT-OSS 20B (Medium)"),
        ])
    }
}
