//! Per-run narration settings.

use blogcast_core::BlogcastConfig;
use derive_builder::Builder;
use derive_getters::Getters;
use std::time::Duration;

/// Knobs shared by every attempt of one run.
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
#[builder(setter(into))]
pub struct NarrationSettings {
    /// Maximum characters in a summary
    #[builder(default = "2000")]
    summary_max_chars: usize,
    /// Completion token cap for the summary request
    #[builder(default = "Some(1024)")]
    max_tokens: Option<u32>,
    /// Sampling temperature for the summary request
    #[builder(default = "Some(0.7)")]
    temperature: Option<f32>,
    /// Upper bound on one whole attempt
    #[builder(default = "Duration::from_secs(300)")]
    attempt_timeout: Duration,
}

impl NarrationSettings {
    /// Creates a new builder for `NarrationSettings`.
    pub fn builder() -> NarrationSettingsBuilder {
        NarrationSettingsBuilder::default()
    }

    /// Settings taken from loaded configuration.
    pub fn from_config(config: &BlogcastConfig) -> Self {
        Self {
            summary_max_chars: *config.narration().summary_max_chars(),
            max_tokens: Some(*config.generation().max_tokens()),
            temperature: Some(*config.generation().temperature()),
            attempt_timeout: config.narration().attempt_timeout(),
        }
    }
}

impl Default for NarrationSettings {
    fn default() -> Self {
        Self {
            summary_max_chars: 2000,
            max_tokens: Some(1024),
            temperature: Some(0.7),
            attempt_timeout: Duration::from_secs(300),
        }
    }
}
