//! Model-fallback orchestration.

use crate::{AgentTools, FallbackMetrics, FallbackState, NarrationAgent, NarrationSettings};
use blogcast_core::{BackendCandidate, RunOutcome};
use blogcast_error::{
    BlogcastError, BlogcastResult, ClassifyFailure, FailureClass, NarrationError,
    NarrationErrorKind,
};
use blogcast_interface::{DriverFactory, ProgressReporter, RunEvent};
use derive_getters::Getters;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// One failed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AttemptRecord {
    /// Candidate that was tried
    candidate: BackendCandidate,
    /// How the failure was classified
    class: FailureClass,
    /// One-line failure description
    detail: String,
    /// Full error chain with source locations
    diagnostic: String,
}

impl AttemptRecord {
    fn new(candidate: BackendCandidate, err: &BlogcastError) -> Self {
        Self {
            candidate,
            class: err.failure_class(),
            detail: err.user_message(),
            diagnostic: err.to_string(),
        }
    }
}

/// Result of a run that reached [`FallbackState::Succeeded`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FallbackSuccess {
    /// Output of the successful attempt
    outcome: RunOutcome,
    /// Failed attempts that preceded it, in order
    failed_attempts: Vec<AttemptRecord>,
}

impl FallbackSuccess {
    /// Number of candidates tried, including the successful one.
    pub fn attempts_made(&self) -> usize {
        self.failed_attempts.len() + 1
    }

    /// Consume into the outcome.
    pub fn into_outcome(self) -> RunOutcome {
        self.outcome
    }
}

/// Terminal failure of a fallback run.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum OrchestratorFailure {
    /// No candidates were supplied
    #[display("No models configured to try")]
    NoCandidates,

    /// The last candidate hit a rate or size limit and none remain
    #[display(
        "All {} models exceeded their rate or size limits. Try again later or pick a shorter article.",
        attempts.len()
    )]
    ExhaustedRateLimited {
        /// Every attempt, in order
        attempts: Vec<AttemptRecord>,
    },

    /// A failure ended the run
    #[display("Error with {}: {}", candidate.id(), detail)]
    FailedFatal {
        /// Candidate whose failure ended the run
        candidate: BackendCandidate,
        /// Class of that failure
        class: FailureClass,
        /// One-line description of that failure
        detail: String,
        /// Every attempt, in order, with full diagnostics
        attempts: Vec<AttemptRecord>,
    },

    /// The run was cancelled before it finished
    #[display("Cancelled after {} attempt(s)", attempts.len())]
    Cancelled {
        /// Attempts finished or interrupted before cancellation
        attempts: Vec<AttemptRecord>,
    },
}

impl OrchestratorFailure {
    /// Attempts made before the run stopped.
    pub fn attempts(&self) -> &[AttemptRecord] {
        match self {
            OrchestratorFailure::NoCandidates => &[],
            OrchestratorFailure::ExhaustedRateLimited { attempts }
            | OrchestratorFailure::FailedFatal { attempts, .. }
            | OrchestratorFailure::Cancelled { attempts } => attempts,
        }
    }

    /// The terminal state this failure corresponds to, if any.
    pub fn state(&self) -> Option<FallbackState> {
        match self {
            OrchestratorFailure::ExhaustedRateLimited { .. } => {
                Some(FallbackState::ExhaustedRateLimited)
            }
            OrchestratorFailure::FailedFatal { .. } => Some(FallbackState::FailedFatal),
            OrchestratorFailure::NoCandidates | OrchestratorFailure::Cancelled { .. } => None,
        }
    }
}

enum AttemptEnd {
    Done(BlogcastResult<RunOutcome>),
    Cancelled,
}

/// Tries backend candidates in order until one narrates the article.
///
/// Attempts are strictly sequential with no delay between them; every
/// candidate is tried at most once.
pub struct FallbackOrchestrator {
    factory: Arc<dyn DriverFactory>,
    tools: AgentTools,
    settings: NarrationSettings,
}

impl FallbackOrchestrator {
    /// Create an orchestrator.
    pub fn new(
        factory: Arc<dyn DriverFactory>,
        tools: AgentTools,
        settings: NarrationSettings,
    ) -> Self {
        Self {
            factory,
            tools,
            settings,
        }
    }

    /// Settings applied to every attempt.
    pub fn settings(&self) -> &NarrationSettings {
        &self.settings
    }

    async fn attempt(
        &self,
        candidate: &BackendCandidate,
        url: &str,
        reporter: &dyn ProgressReporter,
        cancel: &CancellationToken,
    ) -> AttemptEnd {
        let driver = match self.factory.build(candidate) {
            Ok(driver) => driver,
            Err(e) => return AttemptEnd::Done(Err(e)),
        };

        let agent = NarrationAgent::new(
            candidate.clone(),
            driver,
            self.tools.clone(),
            self.settings.clone(),
        );
        reporter.report(&RunEvent::AgentReady(candidate.clone()));

        let limit = *self.settings.attempt_timeout();
        tokio::select! {
            _ = cancel.cancelled() => AttemptEnd::Cancelled,
            result = tokio::time::timeout(limit, agent.run(url, reporter)) => match result {
                Ok(result) => AttemptEnd::Done(result),
                Err(_) => AttemptEnd::Done(Err(NarrationError::new(
                    NarrationErrorKind::AttemptTimeout {
                        candidate: candidate.id().clone(),
                        seconds: limit.as_secs(),
                    },
                )
                .into())),
            },
        }
    }

    /// Run the fallback loop over `candidates` for `url`.
    ///
    /// # Errors
    ///
    /// Returns the terminal [`OrchestratorFailure`]; see [`FallbackState`]
    /// for how failures move the run forward.
    #[instrument(skip(self, candidates, reporter, cancel), fields(candidates = candidates.len()))]
    pub async fn run_with_fallback(
        &self,
        candidates: &[BackendCandidate],
        url: &str,
        fallback_enabled: bool,
        reporter: &dyn ProgressReporter,
        cancel: &CancellationToken,
    ) -> Result<FallbackSuccess, OrchestratorFailure> {
        if candidates.is_empty() {
            error!("No candidates supplied");
            return Err(OrchestratorFailure::NoCandidates);
        }

        let metrics = FallbackMetrics::get();
        let total = candidates.len();
        let mut attempts: Vec<AttemptRecord> = Vec::with_capacity(total);
        let mut index = 0;

        loop {
            if cancel.is_cancelled() {
                warn!(index, "Run cancelled before attempt");
                metrics.record_run("cancelled", attempts.len());
                return Err(OrchestratorFailure::Cancelled { attempts });
            }

            let candidate = &candidates[index];
            debug!(state = %FallbackState::Trying(index), "Transition");
            info!(index, total, model = %candidate.id(), "Trying candidate");
            reporter.report(&RunEvent::Trying {
                index,
                total,
                candidate: candidate.clone(),
            });

            let err: BlogcastError = match self.attempt(candidate, url, reporter, cancel).await {
                AttemptEnd::Cancelled => {
                    warn!(model = %candidate.id(), "Run cancelled during attempt");
                    metrics.record_run("cancelled", attempts.len() + 1);
                    return Err(OrchestratorFailure::Cancelled { attempts });
                }
                AttemptEnd::Done(Ok(outcome)) => {
                    debug!(state = %FallbackState::Succeeded, "Transition");
                    info!(model = %candidate.id(), attempts = index + 1, "Candidate succeeded");
                    reporter.report(&RunEvent::Succeeded(candidate.clone()));
                    metrics.record_attempt(candidate.id(), None);
                    metrics.record_run("succeeded", index + 1);
                    return Ok(FallbackSuccess {
                        outcome,
                        failed_attempts: attempts,
                    });
                }
                AttemptEnd::Done(Err(err)) => err,
            };

            let record = AttemptRecord::new(candidate.clone(), &err);
            let class = record.class;
            let detail = record.detail.clone();
            match class {
                FailureClass::RateOrSizeLimit => {
                    warn!(model = %candidate.id(), error = %detail, "Candidate hit rate or size limit")
                }
                FailureClass::Other => {
                    error!(model = %candidate.id(), error = ?err, "Candidate failed")
                }
            }
            reporter.report(&RunEvent::CandidateFailed {
                candidate: candidate.clone(),
                class,
                detail: detail.clone(),
            });
            attempts.push(record);
            metrics.record_attempt(candidate.id(), Some(class));

            let state = FallbackState::after_failure(index, total, class, fallback_enabled);
            if let FallbackState::Trying(next) = state {
                metrics.record_fallback(candidate.id(), class);
                index = next;
                continue;
            }

            debug!(%state, "Transition");
            if state == FallbackState::ExhaustedRateLimited {
                reporter.report(&RunEvent::Exhausted(attempts.len()));
                metrics.record_run("exhausted_rate_limited", attempts.len());
                return Err(OrchestratorFailure::ExhaustedRateLimited { attempts });
            }

            reporter.report(&RunEvent::Fatal(detail.clone()));
            metrics.record_run("failed_fatal", attempts.len());
            return Err(OrchestratorFailure::FailedFatal {
                candidate: candidate.clone(),
                class,
                detail,
                attempts,
            });
        }
    }
}
