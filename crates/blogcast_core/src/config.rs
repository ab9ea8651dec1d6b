//! Layered TOML configuration.
//!
//! Configuration is assembled from:
//! - Bundled defaults (include_str! from blogcast.toml)
//! - User overrides (~/.config/blogcast/blogcast.toml, then ./blogcast.toml)
//!
//! Later sources override earlier ones key by key.

use crate::{BackendCandidate, CandidateCatalog};
use blogcast_error::{BlogcastError, BlogcastResult, ConfigError};
use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../blogcast.toml");

/// Backend selection defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct ModelsConfig {
    /// Identifier of the candidate tried first
    default: String,
    /// Whether to fall back to the other candidates on failure
    fallback: bool,
}

/// Text-generation endpoint settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct GenerationConfig {
    /// Chat completions URL
    endpoint: String,
    /// Per-request timeout in seconds
    timeout_secs: u64,
    /// Completion token cap sent with each request
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl GenerationConfig {
    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Content extraction endpoint settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct ScrapeConfig {
    /// Scrape URL
    endpoint: String,
    /// Maximum characters of content handed downstream
    max_chars: usize,
    /// Per-request timeout in seconds
    timeout_secs: u64,
}

impl ScrapeConfig {
    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Speech synthesis endpoint settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct SpeechConfig {
    /// Text-to-speech base URL; the voice id is appended as a path segment
    endpoint: String,
    /// Voice identifier
    voice_id: String,
    /// Synthesis model identifier
    model_id: String,
    /// Requested output format, e.g. `pcm_44100` or `mp3_44100_128`
    output_format: String,
    /// Per-request timeout in seconds
    timeout_secs: u64,
}

impl SpeechConfig {
    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Narration attempt settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct NarrationConfig {
    /// Maximum characters in a generated summary
    summary_max_chars: usize,
    /// Upper bound on one whole attempt in seconds
    attempt_timeout_secs: u64,
}

impl NarrationConfig {
    /// Upper bound on one whole attempt.
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }
}

/// Audio output settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct StorageConfig {
    /// Directory generated audio is written into
    output_dir: PathBuf,
    /// File name used for exported copies
    download_name: String,
}

/// Top-level blogcast configuration.
///
/// # Example
///
/// ```no_run
/// use blogcast_core::BlogcastConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = BlogcastConfig::load()?;
/// println!("Default model: {}", config.models().default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct BlogcastConfig {
    /// Ordered backend candidates
    catalog: CandidateCatalog,
    /// Backend selection defaults
    models: ModelsConfig,
    /// Text-generation endpoint
    generation: GenerationConfig,
    /// Content extraction endpoint
    scrape: ScrapeConfig,
    /// Speech synthesis endpoint
    speech: SpeechConfig,
    /// Narration attempt settings
    narration: NarrationConfig,
    /// Audio output settings
    storage: StorageConfig,
}

impl BlogcastConfig {
    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> BlogcastResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/blogcast/blogcast.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("blogcast").required(false));

        Self::finish(builder)?.validated()
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn bundled() -> BlogcastResult<Self> {
        let builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
        Self::finish(builder)?.validated()
    }

    /// Bundled defaults overridden by one specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> BlogcastResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)?.validated()
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> BlogcastResult<Self> {
        builder
            .build()
            .map_err(|e| {
                BlogcastError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                BlogcastError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    fn validated(self) -> BlogcastResult<Self> {
        if self.catalog.is_empty() {
            return Err(ConfigError::new("Model catalog cannot be empty").into());
        }
        if let Some(id) = self.catalog.first_duplicate() {
            return Err(ConfigError::new(format!(
                "Model '{}' appears more than once in the catalog",
                id
            ))
            .into());
        }
        if self.catalog.find(&self.models.default).is_none() {
            return Err(ConfigError::new(format!(
                "Default model '{}' is not in the catalog",
                self.models.default
            ))
            .into());
        }
        Ok(self)
    }

    /// The default candidate.
    pub fn default_candidate(&self) -> Option<&BackendCandidate> {
        self.catalog.find(&self.models.default)
    }

    /// Replace the output directory, e.g. from a CLI flag.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.output_dir = dir.into();
        self
    }

    /// Point every remote endpoint at different URLs.
    ///
    /// Used to route a run through a proxy or a local test server.
    pub fn with_endpoints(
        mut self,
        generation: impl Into<String>,
        scrape: impl Into<String>,
        speech: impl Into<String>,
    ) -> Self {
        self.generation.endpoint = generation.into();
        self.scrape.endpoint = scrape.into();
        self.speech.endpoint = speech.into();
        self
    }
}
