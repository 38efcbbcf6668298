//! Submission store operations
//!
//! Every operation loads the collection fresh from the backing file, applies
//! its mutation (if any) in memory, and rewrites the whole collection before
//! returning. Mutating operations hold a single-writer lock across that
//! cycle: two concurrent mutations can otherwise both load the same
//! pre-mutation snapshot and the later write silently discards the earlier
//! one.

use std::path::Path;

use tokio::sync::Mutex;

use super::backing::BackingFile;
use super::errors::{StoreError, StoreResult};
use super::record::Submission;

/// Parse a textual positional index into a typed one.
///
/// # Errors
///
/// Returns `StoreError::InvalidArgument` when the input is missing or not an
/// integer. Range checking is left to the operation itself, so a negative
/// index parses fine here and fails there with `NotFound`.
pub fn parse_index(raw: Option<&str>) -> StoreResult<i64> {
    raw.unwrap_or_default().trim().parse::<i64>().map_err(|_| {
        StoreError::invalid_argument("Invalid index parameter. It should be a number.")
    })
}

/// The submission record store.
///
/// Owns the backing file path exclusively. Constructed once at process start
/// and shared by handle; the in-memory collection within one operation is
/// owned by that operation alone and discarded after the write-back.
pub struct SubmissionStore {
    backing: BackingFile,
    /// Serializes the load-mutate-write cycle of mutating operations.
    write_lock: Mutex<()>,
}

impl SubmissionStore {
    /// Create a store over the backing file at `path`.
    ///
    /// A missing file is a valid empty store.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            backing: BackingFile::new(path.as_ref()),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        self.backing.path()
    }

    /// Load the full ordered collection.
    pub async fn load(&self) -> StoreResult<Vec<Submission>> {
        self.backing.load().await
    }

    /// Append a record to the end of the collection and persist.
    ///
    /// Returns the appended record. Validation runs before any load, so an
    /// invalid record never touches the backing file.
    pub async fn append(&self, submission: Submission) -> StoreResult<Submission> {
        submission.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut submissions = self.backing.load().await?;
        submissions.push(submission.clone());
        self.backing.persist(&submissions).await?;

        Ok(submission)
    }

    /// Fetch the record at `index`.
    ///
    /// # Errors
    ///
    /// `NotFound` when `index` is negative or past the end.
    pub async fn get_at(&self, index: i64) -> StoreResult<Submission> {
        let submissions = self.backing.load().await?;
        let slot = in_bounds(index, submissions.len())?;
        Ok(submissions[slot].clone())
    }

    /// Overwrite the record at `index` with `submission` and persist.
    ///
    /// Returns the new record.
    pub async fn replace_at(&self, index: i64, submission: Submission) -> StoreResult<Submission> {
        submission.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut submissions = self.backing.load().await?;
        let slot = in_bounds(index, submissions.len())?;
        submissions[slot] = submission.clone();
        self.backing.persist(&submissions).await?;

        Ok(submission)
    }

    /// Remove the record at `index` and persist.
    ///
    /// Returns the removed record. Every record previously at a position
    /// after `index` shifts one position earlier; callers addressing by
    /// index must anticipate the shift.
    pub async fn delete_at(&self, index: i64) -> StoreResult<Submission> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.backing.load().await?;
        let slot = in_bounds(index, submissions.len())?;
        let removed = submissions.remove(slot);
        self.backing.persist(&submissions).await?;

        Ok(removed)
    }

    /// Return the ordered subsequence of records matching `query`.
    ///
    /// Matching is a case-insensitive substring test across `name`, `email`,
    /// `phone`, and `github`. An empty query matches every record.
    pub async fn filter(&self, query: &str) -> StoreResult<Vec<Submission>> {
        let submissions = self.backing.load().await?;
        Ok(submissions.into_iter().filter(|s| s.matches(query)).collect())
    }

    /// Return the current collection length.
    pub async fn count(&self) -> StoreResult<usize> {
        Ok(self.backing.load().await?.len())
    }
}

/// Range-check a signed index against the collection length.
fn in_bounds(index: i64, len: usize) -> StoreResult<usize> {
    if index < 0 || index as u64 >= len as u64 {
        return Err(StoreError::NotFound);
    }
    Ok(index as usize)
}
