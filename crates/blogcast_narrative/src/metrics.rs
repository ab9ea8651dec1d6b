//! Fallback run metrics.

use blogcast_error::FailureClass;
use opentelemetry::{KeyValue, global, metrics::Counter};
use std::sync::OnceLock;

static METRICS: OnceLock<FallbackMetrics> = OnceLock::new();

/// Counters for attempts, fallbacks and run endings.
#[derive(Clone)]
pub struct FallbackMetrics {
    attempts: Counter<u64>,
    fallbacks: Counter<u64>,
    runs: Counter<u64>,
}

impl FallbackMetrics {
    fn init() -> Self {
        let meter = global::meter("blogcast_narrative");
        Self {
            attempts: meter
                .u64_counter("blogcast.fallback.attempts")
                .with_description("Narration attempts by model and result")
                .build(),
            fallbacks: meter
                .u64_counter("blogcast.fallback.advances")
                .with_description("Moves from a failed model to the next candidate")
                .build(),
            runs: meter
                .u64_counter("blogcast.fallback.runs")
                .with_description("Fallback runs by terminal state")
                .build(),
        }
    }

    /// The process-wide instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// One attempt ended; `None` means it succeeded.
    pub fn record_attempt(&self, model: &str, failure: Option<FailureClass>) {
        let result = match failure {
            None => "succeeded",
            Some(FailureClass::RateOrSizeLimit) => "limited",
            Some(FailureClass::Other) => "failed",
        };
        self.attempts.add(
            1,
            &[
                KeyValue::new("model", model.to_string()),
                KeyValue::new("result", result),
            ],
        );
    }

    /// The run moved from `from` to the next candidate.
    pub fn record_fallback(&self, from: &str, class: FailureClass) {
        let reason = match class {
            FailureClass::RateOrSizeLimit => "limit",
            FailureClass::Other => "error",
        };
        self.fallbacks.add(
            1,
            &[
                KeyValue::new("from", from.to_string()),
                KeyValue::new("reason", reason),
            ],
        );
    }

    /// The run stopped in `state` after `attempts` attempts.
    pub fn record_run(&self, state: &'static str, attempts: usize) {
        self.runs.add(
            1,
            &[
                KeyValue::new("state", state),
                KeyValue::new("attempts", attempts as i64),
            ],
        );
    }
}
