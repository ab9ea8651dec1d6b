//! Status events emitted during a run.

use blogcast_core::BackendCandidate;
use blogcast_error::FailureClass;

/// Phase of a single narration attempt.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum RunPhase {
    /// Fetching article content
    Fetching,
    /// Generating the summary
    Summarizing,
    /// Synthesizing speech
    Synthesizing,
}

/// Observable progress of a run.
///
/// Exactly one `Trying` event precedes every attempt, in attempt order.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RunEvent {
    /// An attempt with `candidate` is starting
    #[display("Trying {} ({}/{})", candidate, index + 1, total)]
    Trying {
        /// Zero-based attempt index
        index: usize,
        /// Number of candidates in this run
        total: usize,
        /// Candidate being tried
        candidate: BackendCandidate,
    },

    /// The narration agent for the current candidate is assembled
    #[display("Agent ready with {}", _0)]
    AgentReady(BackendCandidate),

    /// The current attempt entered a new phase
    #[display("{}", _0)]
    Phase(RunPhase),

    /// The current candidate failed
    #[display("{} failed ({}): {}", candidate, class, detail)]
    CandidateFailed {
        /// Candidate that failed
        candidate: BackendCandidate,
        /// How the failure was classified
        class: FailureClass,
        /// Human-readable detail
        detail: String,
    },

    /// An attempt produced a result
    #[display("Succeeded with {}", _0)]
    Succeeded(BackendCandidate),

    /// Every candidate hit a rate or size limit
    #[display("All {} models exhausted by rate or size limits", _0)]
    Exhausted(usize),

    /// The run stopped on a non-limit failure
    #[display("Stopped after failure: {}", _0)]
    Fatal(String),

    /// Audio is being written to disk
    #[display("Saving audio")]
    Saving,

    /// Audio was written to disk
    #[display("Saved audio to {}", _0)]
    Saved(String),
}

impl RunEvent {
    /// Whether this event ends the fallback loop.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunEvent::Succeeded(_) | RunEvent::Exhausted(_) | RunEvent::Fatal(_)
        )
    }
}
