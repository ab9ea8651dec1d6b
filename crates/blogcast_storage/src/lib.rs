//! Audio persistence for blogcast.
//!
//! Decodes the first audio payload of a successful run and writes it under a
//! fresh `podcast_<uuid>.wav` name.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio_store;

pub use audio_store::AudioStore;
