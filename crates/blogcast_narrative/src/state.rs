//! Fallback state machine.

use blogcast_error::FailureClass;

/// Where a fallback run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FallbackState {
    /// Attempting the candidate at this index
    #[display("trying candidate {}", _0)]
    Trying(usize),
    /// An attempt produced a result
    #[display("succeeded")]
    Succeeded,
    /// The last attempt hit a rate or size limit and nothing is left to try
    #[display("exhausted by rate limits")]
    ExhaustedRateLimited,
    /// The run stopped on a failure that fallback cannot or may not cure
    #[display("failed")]
    FailedFatal,
}

impl FallbackState {
    /// Whether the run has stopped.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FallbackState::Trying(_))
    }

    /// State after the attempt at `index` of `total` failed with `class`.
    ///
    /// With fallback disabled every failure is fatal. Otherwise the next
    /// candidate is tried while any remain; when none do, the class of this
    /// last failure picks the terminal state.
    ///
    /// ```
    /// use blogcast_error::FailureClass;
    /// use blogcast_narrative::FallbackState;
    ///
    /// let limit = FailureClass::RateOrSizeLimit;
    /// assert_eq!(FallbackState::after_failure(0, 3, limit, true), FallbackState::Trying(1));
    /// assert_eq!(FallbackState::after_failure(2, 3, limit, true), FallbackState::ExhaustedRateLimited);
    /// assert_eq!(FallbackState::after_failure(0, 3, limit, false), FallbackState::FailedFatal);
    /// ```
    pub fn after_failure(
        index: usize,
        total: usize,
        class: FailureClass,
        fallback_enabled: bool,
    ) -> Self {
        if !fallback_enabled {
            return FallbackState::FailedFatal;
        }
        if index + 1 < total {
            return FallbackState::Trying(index + 1);
        }
        match class {
            FailureClass::RateOrSizeLimit => FallbackState::ExhaustedRateLimited,
            FailureClass::Other => FallbackState::FailedFatal,
        }
    }
}
