//! Blogcast - turn a blog post into a short narrated podcast.
//!
//! Blogcast fetches the main content of a web page, asks a text-generation
//! backend for a conversational summary, converts that summary to speech and
//! saves the audio as a WAV file.
//!
//! # Quick Start
//!
//! ```no_run
//! use blogcast::{BlogcastConfig, ConsoleReporter, Credentials, PodcastRequest, Podcaster};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let podcaster = Podcaster::new(
//!     BlogcastConfig::load()?,
//!     &Credentials::new("gsk_...", "el_...", "fc-..."),
//! )?;
//!
//! let request = PodcastRequest::builder()
//!     .url("https://example.com/post")
//!     .build()?;
//!
//! let podcast = podcaster
//!     .generate(&request, &ConsoleReporter::default(), &CancellationToken::new())
//!     .await?;
//! println!("Saved {}", podcast.audio().path().display());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Blogcast is organized as a workspace with focused crates:
//!
//! - `blogcast_error` - Error types and failure classification
//! - `blogcast_core` - Core data types and configuration
//! - `blogcast_interface` - Backend and progress traits
//! - `blogcast_models` - Groq text generation
//! - `blogcast_tools` - Firecrawl scraping and ElevenLabs speech
//! - `blogcast_storage` - Audio persistence
//! - `blogcast_narrative` - Narration agent and model fallback
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod pipeline;
mod status;

pub use blogcast_core::*;
pub use blogcast_error::*;
pub use blogcast_interface::*;
pub use blogcast_models::{GroqDriver, GroqDriverFactory, LlmMetrics};
pub use blogcast_narrative::{
    AgentTools, AttemptRecord, FallbackMetrics, FallbackOrchestrator, FallbackState, FallbackSuccess,
    NarrationAgent, NarrationSettings, OrchestratorFailure,
};
pub use blogcast_storage::AudioStore;
pub use blogcast_tools::{ElevenLabsSynthesizer, FirecrawlFetcher};

pub use pipeline::{Podcast, PodcastFailure, PodcastRequest, PodcastRequestBuilder, Podcaster};
pub use status::{ConsoleReporter, status_line};
