//! Backing file access
//!
//! The whole collection is serialized as one pretty-printed JSON array and
//! rewritten wholesale on every mutation. Rewrites go through a sibling
//! temporary file followed by a rename, so a failed write leaves the
//! previous contents intact and a concurrent load never observes a partial
//! collection.

use std::io;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::record::Submission;

/// Handle to the flat file holding the serialized collection.
pub struct BackingFile {
    path: PathBuf,
}

impl BackingFile {
    /// Create a handle for the backing file at `path`.
    ///
    /// The file is not created here; a missing file reads as an empty
    /// collection and comes into existence on the first persist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` on I/O failure other than non-existence,
    /// `StoreError::Corrupt` if the content is not a JSON submission array.
    pub async fn load(&self) -> StoreResult<Vec<Submission>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Read { source: e }),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// Persist the full (possibly empty) collection to disk.
    ///
    /// Writes to a temporary sibling and renames it over the backing file.
    pub async fn persist(&self, submissions: &[Submission]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(submissions)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|e| StoreError::Write { source: e })?;

        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StoreError::Write { source: e })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
