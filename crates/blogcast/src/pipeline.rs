//! End-to-end podcast generation.

use blogcast_core::{BackendCandidate, BlogcastConfig, Credentials, PersistedAudio, RunOutcome};
use blogcast_error::{
    BlogcastError, BlogcastErrorKind, BlogcastResult, ConfigError, StorageErrorKind,
};
use blogcast_interface::{DriverFactory, ProgressReporter, RunEvent};
use blogcast_models::GroqDriverFactory;
use blogcast_narrative::{
    AgentTools, AttemptRecord, FallbackOrchestrator, NarrationSettings, OrchestratorFailure,
};
use blogcast_storage::AudioStore;
use blogcast_tools::{ElevenLabsSynthesizer, FirecrawlFetcher};
use derive_builder::Builder;
use derive_getters::Getters;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument};

/// What to narrate and how to pick the backend.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct PodcastRequest {
    /// Blog post URL
    url: String,
    /// Catalog id of the preferred model; the configured default when unset
    #[builder(default)]
    model: Option<String>,
    /// Whether to fall back to other models; the configured default when unset
    #[builder(default)]
    fallback: Option<bool>,
}

impl PodcastRequest {
    /// Creates a new builder for `PodcastRequest`.
    pub fn builder() -> PodcastRequestBuilder {
        PodcastRequestBuilder::default()
    }
}

/// A generated and saved podcast.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Podcast {
    /// Model that wrote the summary
    model: BackendCandidate,
    /// Spoken summary text
    summary: Option<String>,
    /// Saved audio file
    audio: PersistedAudio,
    /// Failed attempts before the successful one
    failed_attempts: Vec<AttemptRecord>,
}

/// Why a podcast was not produced.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PodcastFailure {
    /// The request was refused before any network call
    #[display("{}", _0)]
    InvalidRequest(BlogcastError),

    /// No model produced a narration
    #[display("{}", _0)]
    Narration(OrchestratorFailure),

    /// Narration succeeded but its audio could not be saved
    #[display("{}", error)]
    Persistence {
        /// The successful narration, kept so it is not lost
        outcome: RunOutcome,
        /// The storage failure
        error: BlogcastError,
    },
}

impl PodcastFailure {
    /// One-line message suitable for end users.
    ///
    /// Source locations are left out; the `Debug` form keeps them.
    pub fn user_message(&self) -> String {
        match self {
            PodcastFailure::InvalidRequest(e) => e.user_message(),
            PodcastFailure::Narration(failure) => failure.to_string(),
            PodcastFailure::Persistence { error, .. } => match error.kind() {
                BlogcastErrorKind::Storage(e) if e.kind == StorageErrorKind::NoAudio => {
                    "No audio was generated. Please try again.".to_string()
                }
                _ => format!("Error saving audio: {}", error.user_message()),
            },
        }
    }
}

/// Validates input, runs the model fallback and saves the audio.
pub struct Podcaster {
    config: BlogcastConfig,
    orchestrator: FallbackOrchestrator,
    store: AudioStore,
}

impl Podcaster {
    /// Wire the Groq, Firecrawl and ElevenLabs clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any credential is missing.
    #[instrument(skip_all)]
    pub fn new(config: BlogcastConfig, credentials: &Credentials) -> BlogcastResult<Self> {
        credentials.validate()?;

        let factory = Arc::new(GroqDriverFactory::new(
            credentials.groq(),
            config.generation(),
        ));
        let tools = AgentTools::new(
            Arc::new(FirecrawlFetcher::new(credentials.firecrawl(), config.scrape())),
            Arc::new(ElevenLabsSynthesizer::new(
                credentials.elevenlabs(),
                config.speech(),
            )),
        );
        Ok(Self::with_components(config, factory, tools))
    }

    /// Assemble from explicit components.
    pub fn with_components(
        config: BlogcastConfig,
        factory: Arc<dyn DriverFactory>,
        tools: AgentTools,
    ) -> Self {
        let orchestrator =
            FallbackOrchestrator::new(factory, tools, NarrationSettings::from_config(&config));
        let store = AudioStore::new(config.storage().output_dir().clone());
        Self {
            config,
            orchestrator,
            store,
        }
    }

    /// Loaded configuration.
    pub fn config(&self) -> &BlogcastConfig {
        &self.config
    }

    /// Produce a podcast for `request`.
    ///
    /// # Errors
    ///
    /// See [`PodcastFailure`].
    #[instrument(skip(self, reporter, cancel), fields(url = %request.url()))]
    pub async fn generate(
        &self,
        request: &PodcastRequest,
        reporter: &dyn ProgressReporter,
        cancel: &CancellationToken,
    ) -> Result<Podcast, PodcastFailure> {
        let url = request.url().trim();
        if url.is_empty() {
            return Err(PodcastFailure::InvalidRequest(
                ConfigError::new("Please enter a blog URL").into(),
            ));
        }

        let selected = request
            .model()
            .as_deref()
            .unwrap_or(self.config.models().default().as_str());
        let fallback = request.fallback().unwrap_or(*self.config.models().fallback());
        let candidates = self
            .config
            .catalog()
            .ordered_for(selected, fallback)
            .map_err(PodcastFailure::InvalidRequest)?;

        let success = self
            .orchestrator
            .run_with_fallback(&candidates, url, fallback, reporter, cancel)
            .await
            .map_err(PodcastFailure::Narration)?;

        let failed_attempts = success.failed_attempts().clone();
        let outcome = success.into_outcome();

        reporter.report(&RunEvent::Saving);
        let audio = match self.store.persist(&outcome).await {
            Ok(audio) => audio,
            Err(error) => {
                error!(error = %error, "Failed to save audio");
                return Err(PodcastFailure::Persistence { outcome, error });
            }
        };
        reporter.report(&RunEvent::Saved(audio.path().display().to_string()));
        info!(path = %audio.path().display(), model = %outcome.candidate().id(), "Podcast ready");

        Ok(Podcast {
            model: outcome.candidate().clone(),
            summary: outcome.content().clone(),
            audio,
            failed_attempts,
        })
    }

    /// Write a copy of `podcast` under the configured download name.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the copy cannot be written.
    pub async fn export(
        &self,
        podcast: &Podcast,
        dir: impl AsRef<std::path::Path>,
    ) -> BlogcastResult<std::path::PathBuf> {
        AudioStore::export(
            podcast.audio(),
            dir,
            self.config.storage().download_name(),
        )
        .await
    }
}
