//! Filesystem audio store.

use base64::{Engine, engine::general_purpose::STANDARD};
use blogcast_core::{PersistedAudio, RunOutcome};
use blogcast_error::{BlogcastResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Writes generated audio into one output directory.
///
/// # Example Structure
///
/// ```text
/// audio_generations/
/// ├── podcast_1b4e28ba-2fa1-11d2-883f-0016d3cca427.wav
/// └── podcast_6fa459ea-ee8a-3ca4-894e-db77e160355e.wav
/// ```
///
/// Every call to [`AudioStore::persist`] produces a new file; nothing is
/// overwritten or cleaned up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioStore {
    output_dir: PathBuf,
}

impl AudioStore {
    /// Create a store rooted at `output_dir`.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory audio is written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn fresh_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("podcast_{}.wav", Uuid::new_v4()))
    }

    /// Move a fully written temp file into place, removing it if that fails.
    async fn commit(temp_path: &Path, path: &Path) -> BlogcastResult<()> {
        if let Err(e) = tokio::fs::rename(temp_path, path).await {
            if let Err(cleanup) = tokio::fs::remove_file(temp_path).await {
                warn!(path = %temp_path.display(), error = %cleanup, "Could not remove temp file");
            }
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }
        Ok(())
    }

    /// Decode the first audio payload of `outcome` and write it to disk.
    ///
    /// # Errors
    ///
    /// - [`StorageErrorKind::NoAudio`] if the outcome carries no audio; nothing
    ///   is created on disk in that case
    /// - [`StorageErrorKind::Decode`] if the payload is not valid base64
    /// - Directory, write or read failures
    #[instrument(skip(self, outcome), fields(dir = %self.output_dir.display(), model = %outcome.candidate().id()))]
    pub async fn persist(&self, outcome: &RunOutcome) -> BlogcastResult<PersistedAudio> {
        let payload = outcome
            .first_audio()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NoAudio))?;

        let bytes = STANDARD
            .decode(payload.base64_audio())
            .map_err(|e| StorageError::new(StorageErrorKind::Decode(e.to_string())))?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.output_dir.display(),
                    e
                )))
            })?;

        let path = self.fresh_path();

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        Self::commit(&temp_path, &path).await?;

        let stored = tokio::fs::read(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        info!(path = %path.display(), size = stored.len(), "Saved podcast audio");
        Ok(PersistedAudio::new(path, stored))
    }

    /// Write a copy of persisted audio as `dir/file_name`, replacing any
    /// existing file of that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file written.
    #[instrument(skip(audio, dir), fields(source = %audio.path().display(), dir = %dir.as_ref().display()))]
    pub async fn export(
        audio: &PersistedAudio,
        dir: impl AsRef<Path>,
        file_name: &str,
    ) -> BlogcastResult<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let target = dir.join(file_name);
        tokio::fs::write(&target, audio.bytes()).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                target.display(),
                e
            )))
        })?;

        debug!(target = %target.display(), "Exported podcast copy");
        Ok(target)
    }
}
