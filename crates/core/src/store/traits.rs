//! Trait definitions for the solved-problem store.

use thiserror::Error;

use super::types::SolvedProblemRecord;

/// Maximum records accepted by a single [`SolvedProblemStore::put_batch`]
/// call. Callers chunk larger writes themselves.
pub const MAX_BATCH_WRITE: usize = 25;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Batch of {size} records exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },
}

/// Key-value store of solved problems, keyed by problem id.
pub trait SolvedProblemStore: Send + Sync {
    /// Point lookup by problem id.
    fn get(&self, problem_id: &str) -> Result<Option<SolvedProblemRecord>, StoreError>;

    /// Whether a record exists for the problem id.
    fn contains(&self, problem_id: &str) -> Result<bool, StoreError> {
        Ok(self.get(problem_id)?.is_some())
    }

    /// Insert or overwrite up to [`MAX_BATCH_WRITE`] records.
    ///
    /// Writes are idempotent upserts keyed by `problem_id`; a later record
    /// for the same id replaces the earlier one.
    fn put_batch(&self, records: &[SolvedProblemRecord]) -> Result<(), StoreError>;

    /// Number of records in the store.
    fn count(&self) -> Result<u64, StoreError>;
}
