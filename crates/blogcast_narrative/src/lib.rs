//! Narration agent and model-fallback orchestration.
//!
//! One [`NarrationAgent`] is assembled per attempt and runs the fixed
//! sequence fetch → summarize → synthesize. The [`FallbackOrchestrator`]
//! walks an ordered list of backend candidates, running one agent per
//! candidate until one succeeds or a stop condition is reached.
//!
//! # Example
//!
//! ```no_run
//! use blogcast_core::BlogcastConfig;
//! use blogcast_interface::{ContentFetcher, DriverFactory, RunEvent, SpeechSynthesizer};
//! use blogcast_narrative::{AgentTools, FallbackOrchestrator, NarrationSettings};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(
//! #     factory: Arc<dyn DriverFactory>,
//! #     fetcher: Arc<dyn ContentFetcher>,
//! #     synthesizer: Arc<dyn SpeechSynthesizer>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let config = BlogcastConfig::load()?;
//! let orchestrator = FallbackOrchestrator::new(
//!     factory,
//!     AgentTools::new(fetcher, synthesizer),
//!     NarrationSettings::from_config(&config),
//! );
//!
//! let candidates = config.catalog().ordered_for("llama-3.1-8b-instant", true)?;
//! let reporter = |event: &RunEvent| println!("{}", event);
//! let success = orchestrator
//!     .run_with_fallback(
//!         &candidates,
//!         "https://example.com/post",
//!         true,
//!         &reporter,
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//! println!("Narrated by {}", success.outcome().candidate());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod instructions;
mod metrics;
mod orchestrator;
mod settings;
mod state;
mod summary;

pub use agent::{AgentTools, NarrationAgent};
pub use instructions::{instruction_script, summarization_prompt};
pub use metrics::FallbackMetrics;
pub use orchestrator::{AttemptRecord, FallbackOrchestrator, FallbackSuccess, OrchestratorFailure};
pub use settings::{NarrationSettings, NarrationSettingsBuilder};
pub use state::FallbackState;
pub use summary::fit_to_budget;
