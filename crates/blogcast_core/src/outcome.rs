//! Results of a narration attempt and of persisting its audio.

use crate::BackendCandidate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One synthesized audio clip, base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct AudioPayload {
    /// Base64-encoded audio bytes
    base64_audio: String,
    /// MIME type of the decoded bytes
    mime_type: String,
}

impl AudioPayload {
    /// Create a payload from already-encoded audio.
    pub fn new(base64_audio: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            base64_audio: base64_audio.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Output of one successful narration attempt.
///
/// # Examples
///
/// ```
/// use blogcast_core::{AudioPayload, BackendCandidate, RunOutcome};
///
/// let outcome = RunOutcome::new(
///     BackendCandidate::new("llama-3.1-8b-instant", "Llama 3.1 8B"),
///     Some("Welcome to the show".to_string()),
///     vec![AudioPayload::new("UklGRg==", "audio/wav")],
/// );
///
/// assert!(outcome.first_audio().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RunOutcome {
    /// Backend that produced this outcome
    candidate: BackendCandidate,
    /// Conversational summary text
    content: Option<String>,
    /// Synthesized audio clips
    audio: Vec<AudioPayload>,
}

impl RunOutcome {
    /// Create an outcome.
    pub fn new(
        candidate: BackendCandidate,
        content: Option<String>,
        audio: Vec<AudioPayload>,
    ) -> Self {
        Self {
            candidate,
            content,
            audio,
        }
    }

    /// The first audio clip, if any was produced.
    pub fn first_audio(&self) -> Option<&AudioPayload> {
        self.audio.first()
    }
}

/// An audio file written to disk, with its bytes kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PersistedAudio {
    /// Location of the written file
    path: PathBuf,
    /// File contents as re-read from disk
    bytes: Vec<u8>,
}

impl PersistedAudio {
    /// Create a record of a persisted file.
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    /// File name of the persisted audio.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Directory the audio was written into.
    pub fn directory(&self) -> Option<&Path> {
        self.path.parent()
    }
}
