//! Trait definitions for remote backends.

use crate::RunEvent;
use async_trait::async_trait;
use blogcast_core::{AudioPayload, BackendCandidate, FetchResult, GenerateRequest, GenerateResponse};
use blogcast_error::BlogcastResult;
use std::sync::Arc;

/// Core trait that all text-generation backends implement.
#[async_trait]
pub trait BlogcastDriver: Send + Sync {
    /// Generate a completion for a chat-style request.
    async fn generate(&self, req: &GenerateRequest) -> BlogcastResult<GenerateResponse>;

    /// Provider name (e.g., "groq").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama-3.1-8b-instant").
    fn model_name(&self) -> &str;
}

/// Builds a driver bound to one backend candidate.
///
/// A fresh driver is built for every attempt so that no state leaks from one
/// candidate to the next.
pub trait DriverFactory: Send + Sync {
    /// Build a driver for `candidate`.
    fn build(&self, candidate: &BackendCandidate) -> BlogcastResult<Arc<dyn BlogcastDriver>>;
}

/// Extracts the main content of a web page.
///
/// Failures are reported in-band as [`FetchResult`] values starting with
/// `"Error:"`; implementations never return `Err`.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch and extract `url`.
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Turns text into spoken audio.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` into one or more audio clips.
    async fn synthesize(&self, text: &str) -> BlogcastResult<Vec<AudioPayload>>;

    /// Voice identifier used for synthesis.
    fn voice_id(&self) -> &str;
}

/// Receives status events while a run progresses.
pub trait ProgressReporter: Send + Sync {
    /// Handle one event.
    fn report(&self, event: &RunEvent);
}

impl<F> ProgressReporter for F
where
    F: Fn(&RunEvent) + Send + Sync,
{
    fn report(&self, event: &RunEvent) {
        self(event)
    }
}
