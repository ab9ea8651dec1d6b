//! Summary-generation call metrics.
//!
//! Recorded through the global OpenTelemetry meter; without an installed
//! meter provider every instrument is a no-op.

use crate::OpenAICompatError;
use blogcast_core::TokenUsage;
use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use std::sync::OnceLock;
use std::time::Duration;

static METRICS: OnceLock<LlmMetrics> = OnceLock::new();

/// Instruments for chat-completion calls, labeled by provider and model.
///
/// | Instrument | Labels |
/// |---|---|
/// | `blogcast.generation.calls` | `outcome` = `ok`, `limited` or `failed` |
/// | `blogcast.generation.latency` | |
/// | `blogcast.generation.tokens` | `kind` = `prompt` or `completion` |
/// | `blogcast.generation.errors` | `error_type` |
#[derive(Clone)]
pub struct LlmMetrics {
    calls: Counter<u64>,
    latency: Histogram<f64>,
    tokens: Counter<u64>,
    errors: Counter<u64>,
}

impl LlmMetrics {
    fn init() -> Self {
        let meter = global::meter("blogcast_llm");
        Self {
            calls: meter
                .u64_counter("blogcast.generation.calls")
                .with_description("Summary generation calls by outcome")
                .build(),
            latency: meter
                .f64_histogram("blogcast.generation.latency")
                .with_unit("s")
                .with_description("Time from request to parsed summary or error")
                .build(),
            tokens: meter
                .u64_counter("blogcast.generation.tokens")
                .with_description("Tokens reported by the backend")
                .build(),
            errors: meter
                .u64_counter("blogcast.generation.errors")
                .with_description("Failed generation calls by error type")
                .build(),
        }
    }

    /// The process-wide instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record one finished call.
    ///
    /// Rate and request-size limits count as `limited` so quota pressure on a
    /// model shows apart from genuine failures.
    pub fn record_call(
        &self,
        provider: &'static str,
        model: &str,
        elapsed: Duration,
        result: Result<Option<&TokenUsage>, &OpenAICompatError>,
    ) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(e) if e.is_limit() => "limited",
            Err(_) => "failed",
        };
        let base = [
            KeyValue::new("provider", provider),
            KeyValue::new("model", model.to_string()),
        ];

        self.latency.record(elapsed.as_secs_f64(), &base);
        self.calls
            .add(1, &[base[0].clone(), base[1].clone(), KeyValue::new("outcome", outcome)]);

        match result {
            Ok(Some(usage)) => {
                for (kind, count) in [
                    ("prompt", *usage.prompt_tokens()),
                    ("completion", *usage.completion_tokens()),
                ] {
                    self.tokens
                        .add(count, &[base[1].clone(), KeyValue::new("kind", kind)]);
                }
            }
            Ok(None) => {}
            Err(e) => self.errors.add(
                1,
                &[base[0].clone(), base[1].clone(), KeyValue::new("error_type", e.metric_label())],
            ),
        }
    }
}
