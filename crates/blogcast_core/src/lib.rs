//! Core data types for blogcast.
//!
//! This crate holds the plain data that flows between the fetcher, the
//! narration agent, the fallback orchestrator and audio persistence, along
//! with the layered TOML configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod candidate;
mod config;
mod credentials;
mod fetch;
mod message;
mod outcome;
mod request;
mod text;

pub use candidate::{BackendCandidate, CandidateCatalog};
pub use config::{
    BlogcastConfig, GenerationConfig, ModelsConfig, NarrationConfig, ScrapeConfig, SpeechConfig,
    StorageConfig,
};
pub use credentials::Credentials;
pub use fetch::{FETCH_ERROR_PREFIX, FetchResult};
pub use message::{Message, MessageBuilder, Role};
pub use outcome::{AudioPayload, PersistedAudio, RunOutcome};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse, TokenUsage};
pub use text::truncate_chars;
