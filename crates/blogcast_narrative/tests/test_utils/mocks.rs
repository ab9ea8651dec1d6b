//! Mock backends for testing.

use async_trait::async_trait;
use blogcast_core::{
    AudioPayload, BackendCandidate, FetchResult, GenerateRequest, GenerateResponse,
};
use blogcast_error::{
    BlogcastError, BlogcastResult, GroqErrorKind, ModelsError, ModelsErrorKind, SpeechError,
    SpeechErrorKind,
};
use blogcast_interface::{
    BlogcastDriver, ContentFetcher, DriverFactory, ProgressReporter, RunEvent, SpeechSynthesizer,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Ordered record of calls across all mocks.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.entries().iter().filter(|e| e.starts_with(prefix)).count()
    }
}

/// A single scripted generation response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text
    Success(String),
    /// Fail with this Groq error
    Error(GroqErrorKind),
    /// Sleep, then return this text
    Delayed(Duration, String),
}

struct MockDriver {
    model: String,
    response: MockResponse,
    log: CallLog,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[async_trait]
impl BlogcastDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> BlogcastResult<GenerateResponse> {
        self.log.push(format!("generate:{}", self.model));
        self.requests.lock().unwrap().push(req.clone());
        match &self.response {
            MockResponse::Success(text) => Ok(GenerateResponse::new(text.clone(), None)),
            MockResponse::Error(kind) => Err(BlogcastError::from(ModelsError::new(
                ModelsErrorKind::Groq(kind.clone()),
            ))),
            MockResponse::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(GenerateResponse::new(text.clone(), None))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Driver factory with one scripted response per model id.
///
/// Models without a script succeed with a default summary.
#[derive(Clone, Default)]
pub struct MockDriverFactory {
    scripts: HashMap<String, MockResponse>,
    log: CallLog,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriverFactory {
    pub fn new(log: CallLog) -> Self {
        Self {
            scripts: HashMap::new(),
            log,
            requests: Arc::default(),
        }
    }

    pub fn with(mut self, model: impl Into<String>, response: MockResponse) -> Self {
        self.scripts.insert(model.into(), response);
        self
    }

    pub fn rate_limited(self, model: impl Into<String>) -> Self {
        self.with(
            model,
            MockResponse::Error(GroqErrorKind::RateLimit("tokens per minute".to_string())),
        )
    }

    pub fn failing(self, model: impl Into<String>) -> Self {
        self.with(
            model,
            MockResponse::Error(GroqErrorKind::Api {
                status: 500,
                message: "internal error".to_string(),
            }),
        )
    }

    /// Model ids in the order drivers were built.
    pub fn built(&self) -> Vec<String> {
        self.log
            .entries()
            .iter()
            .filter_map(|e| e.strip_prefix("build:").map(str::to_string))
            .collect()
    }

    /// Requests received by every driver.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl DriverFactory for MockDriverFactory {
    fn build(&self, candidate: &BackendCandidate) -> BlogcastResult<Arc<dyn BlogcastDriver>> {
        self.log.push(format!("build:{}", candidate.id()));
        let response = self
            .scripts
            .get(candidate.id())
            .cloned()
            .unwrap_or_else(|| MockResponse::Success("Welcome to today's episode.".to_string()));
        Ok(Arc::new(MockDriver {
            model: candidate.id().clone(),
            response,
            log: self.log.clone(),
            requests: self.requests.clone(),
        }))
    }
}

/// Fetcher returning a fixed result.
pub struct MockFetcher {
    result: FetchResult,
    log: CallLog,
}

impl MockFetcher {
    pub fn new(result: FetchResult, log: CallLog) -> Self {
        Self { result, log }
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.log.push(format!("fetch:{}", url));
        self.result.clone()
    }
}

/// Synthesizer that records the text it was given.
pub struct MockSynthesizer {
    fail: bool,
    log: CallLog,
    texts: Arc<Mutex<Vec<String>>>,
}

impl MockSynthesizer {
    pub fn new(log: CallLog) -> Self {
        Self {
            fail: false,
            log,
            texts: Arc::default(),
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            log,
            texts: Arc::default(),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str) -> BlogcastResult<Vec<AudioPayload>> {
        self.log.push("synthesize");
        self.texts.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(SpeechError::new(SpeechErrorKind::Api {
                status: 401,
                message: "quota_exceeded".to_string(),
            })
            .into());
        }
        Ok(vec![AudioPayload::new("UklGRg==", "audio/wav")])
    }

    fn voice_id(&self) -> &str {
        "mock-voice"
    }
}

/// Reporter that keeps every event.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<RunEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<RunEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Candidate ids from `Trying` events, in order.
    pub fn tried(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|e| match e {
                RunEvent::Trying { candidate, .. } => Some(candidate.id().clone()),
                _ => None,
            })
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, event: &RunEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
