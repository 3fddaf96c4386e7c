//! In-memory solved-problem store for testing.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::store::{SolvedProblemRecord, SolvedProblemStore, StoreError, MAX_BATCH_WRITE};

/// Mock implementation of [`SolvedProblemStore`].
///
/// Enforces the same batch limit as the real store, records the size of
/// every `put_batch` call and can be told to fail lookups for specific ids
/// or to fail the Nth batch write.
#[derive(Debug, Default)]
pub struct MockSolvedStore {
    records: Mutex<HashMap<String, SolvedProblemRecord>>,
    failing_lookups: Mutex<HashSet<String>>,
    batch_sizes: Mutex<Vec<usize>>,
    /// 1-based index of the batch call that should fail.
    fail_batch_at: Mutex<Option<usize>>,
    lookups: AtomicUsize,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl MockSolvedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing batch accounting.
    pub fn insert(&self, record: SolvedProblemRecord) {
        lock(&self.records).insert(record.problem_id.clone(), record);
    }

    /// Make lookups of `problem_id` fail.
    pub fn fail_lookups_for(&self, problem_id: &str) {
        lock(&self.failing_lookups).insert(problem_id.to_string());
    }

    /// Make the `n`th `put_batch` call (1-based) fail without writing.
    pub fn fail_batch_at(&self, n: usize) {
        *lock(&self.fail_batch_at) = Some(n);
    }

    /// Number of `get`/`contains` calls made.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Sizes of every `put_batch` call, including failed ones.
    pub fn batch_sizes(&self) -> Vec<usize> {
        lock(&self.batch_sizes).clone()
    }

    /// Sorted ids currently stored.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = lock(&self.records).keys().cloned().collect();
        ids.sort_by_key(|id| id.parse::<u64>().unwrap_or(u64::MAX));
        ids
    }

    pub fn record(&self, problem_id: &str) -> Option<SolvedProblemRecord> {
        lock(&self.records).get(problem_id).cloned()
    }
}

impl SolvedProblemStore for MockSolvedStore {
    fn get(&self, problem_id: &str) -> Result<Option<SolvedProblemRecord>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if lock(&self.failing_lookups).contains(problem_id) {
            return Err(StoreError::Database(format!(
                "injected lookup failure for {}",
                problem_id
            )));
        }
        Ok(lock(&self.records).get(problem_id).cloned())
    }

    fn put_batch(&self, records: &[SolvedProblemRecord]) -> Result<(), StoreError> {
        let call = {
            let mut sizes = lock(&self.batch_sizes);
            sizes.push(records.len());
            sizes.len()
        };

        if records.len() > MAX_BATCH_WRITE {
            return Err(StoreError::BatchTooLarge {
                size: records.len(),
                limit: MAX_BATCH_WRITE,
            });
        }
        if *lock(&self.fail_batch_at) == Some(call) {
            return Err(StoreError::Database(format!(
                "injected failure on batch {}",
                call
            )));
        }

        let mut stored = lock(&self.records);
        for record in records {
            stored.insert(record.problem_id.clone(), record.clone());
        }
        Ok(())
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(lock(&self.records).len() as u64)
    }
}
