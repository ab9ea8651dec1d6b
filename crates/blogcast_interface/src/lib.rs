//! Trait definitions for blogcast.
//!
//! The narration agent talks to three remote concerns (text generation,
//! content extraction and speech synthesis) through the traits in this crate,
//! and reports progress through [`ProgressReporter`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{
    BlogcastDriver, ContentFetcher, DriverFactory, ProgressReporter, SpeechSynthesizer,
};
pub use types::{RunEvent, RunPhase};
