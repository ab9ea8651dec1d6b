//! Narration agent bound to one backend candidate.

use crate::{NarrationSettings, fit_to_budget, instruction_script, summarization_prompt};
use blogcast_core::{BackendCandidate, GenerateRequest, Message, RunOutcome};
use blogcast_error::{BlogcastResult, BuilderError, NarrationError, NarrationErrorKind};
use blogcast_interface::{
    BlogcastDriver, ContentFetcher, ProgressReporter, RunEvent, RunPhase, SpeechSynthesizer,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The two callable capabilities every agent is given.
#[derive(Clone)]
pub struct AgentTools {
    fetcher: Arc<dyn ContentFetcher>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl AgentTools {
    /// Bundle a content fetcher and a speech synthesizer.
    pub fn new(fetcher: Arc<dyn ContentFetcher>, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            fetcher,
            synthesizer,
        }
    }

    /// The content fetcher.
    pub fn fetcher(&self) -> &Arc<dyn ContentFetcher> {
        &self.fetcher
    }

    /// The speech synthesizer.
    pub fn synthesizer(&self) -> &Arc<dyn SpeechSynthesizer> {
        &self.synthesizer
    }
}

impl std::fmt::Debug for AgentTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTools")
            .field("voice_id", &self.synthesizer.voice_id())
            .finish_non_exhaustive()
    }
}

/// One backend candidate plus its tools and instructions, run once.
pub struct NarrationAgent {
    candidate: BackendCandidate,
    driver: Arc<dyn BlogcastDriver>,
    tools: AgentTools,
    settings: NarrationSettings,
}

impl NarrationAgent {
    /// Bind an agent to `candidate`, served by `driver`.
    pub fn new(
        candidate: BackendCandidate,
        driver: Arc<dyn BlogcastDriver>,
        tools: AgentTools,
        settings: NarrationSettings,
    ) -> Self {
        Self {
            candidate,
            driver,
            tools,
            settings,
        }
    }

    /// Candidate this agent is bound to.
    pub fn candidate(&self) -> &BackendCandidate {
        &self.candidate
    }

    /// Fetch `url`, summarize it and synthesize the summary.
    ///
    /// The steps always run in that order. A fetch failure stops the attempt
    /// before the backend is called, so no summary is ever produced from an
    /// error message.
    ///
    /// # Errors
    ///
    /// - [`NarrationErrorKind::ContentUnavailable`] when fetching fails
    /// - Generation backend errors, unchanged
    /// - [`NarrationErrorKind::EmptySummary`] when the backend returns no text
    /// - Speech synthesis errors, unchanged
    #[instrument(skip(self, reporter), fields(model = %self.candidate.id(), provider = self.driver.provider_name()))]
    pub async fn run(&self, url: &str, reporter: &dyn ProgressReporter) -> BlogcastResult<RunOutcome> {
        reporter.report(&RunEvent::Phase(RunPhase::Fetching));
        let fetched = self.tools.fetcher.fetch(url).await;
        if fetched.is_error() {
            warn!(detail = %fetched, "Content fetch failed, not summarizing");
            return Err(NarrationError::new(NarrationErrorKind::ContentUnavailable(
                fetched.into_inner(),
            ))
            .into());
        }
        debug!(chars = fetched.char_len(), "Fetched content");

        reporter.report(&RunEvent::Phase(RunPhase::Summarizing));
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system(instruction_script(*self.settings.summary_max_chars())),
                Message::user(summarization_prompt(url, fetched.as_str())),
            ])
            .max_tokens(*self.settings.max_tokens())
            .temperature(*self.settings.temperature())
            .build()
            .map_err(|e| BuilderError::new("generation request", e.to_string()))?;

        let response = self.driver.generate(&request).await?;
        let summary = fit_to_budget(response.text(), *self.settings.summary_max_chars());
        if summary.is_empty() {
            return Err(NarrationError::new(NarrationErrorKind::EmptySummary(
                self.candidate.id().clone(),
            ))
            .into());
        }
        debug!(chars = summary.chars().count(), "Summary ready");

        reporter.report(&RunEvent::Phase(RunPhase::Synthesizing));
        let audio = self.tools.synthesizer.synthesize(&summary).await?;

        info!(clips = audio.len(), "Narration complete");
        Ok(RunOutcome::new(self.candidate.clone(), Some(summary), audio))
    }
}
