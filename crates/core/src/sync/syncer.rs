//! Syncer implementation.
//!
//! One pass per solver, strictly sequential:
//! fetch page -> stop if empty -> write in chunks -> pause -> next page.
//! Fetch and write failures end the pass early and are reported, never
//! raised. Writes are upserts, so re-running a partial pass is safe.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::config::TrackedSolver;
use crate::searcher::{ProblemQuery, ProblemSearcher, QueryBuilder};
use crate::store::{SolvedProblemRecord, SolvedProblemStore, MAX_BATCH_WRITE};

use super::config::SyncConfig;
use super::types::{SyncCursor, SyncOutcome, SyncReport};

/// Copies solvers' solved histories into the solved-problem store.
pub struct Syncer {
    searcher: Arc<dyn ProblemSearcher>,
    store: Arc<dyn SolvedProblemStore>,
    config: SyncConfig,
}

impl Syncer {
    pub fn new(
        searcher: Arc<dyn ProblemSearcher>,
        store: Arc<dyn SolvedProblemStore>,
        config: SyncConfig,
    ) -> Self {
        Self {
            searcher,
            store,
            config,
        }
    }

    fn batch_size(&self) -> usize {
        self.config.batch_size.clamp(1, MAX_BATCH_WRITE)
    }

    /// Sync every solver in order, one after another.
    pub async fn sync_all(&self, solvers: &[TrackedSolver]) -> Vec<SyncReport> {
        let mut reports = Vec::with_capacity(solvers.len());
        for solver in solvers {
            info!(name = %solver.name, handle = %solver.handle, "Syncing solver");
            reports.push(self.sync_solver(&solver.handle).await);
        }
        reports
    }

    /// Sync one solver's full solved history.
    pub async fn sync_solver(&self, handle: &str) -> SyncReport {
        let start = Instant::now();
        let query = QueryBuilder::new().solved_by(handle).build();
        let mut cursor = SyncCursor::new();
        let mut upstream_count = None;
        let mut partial = 0;

        let outcome = loop {
            let request = ProblemQuery::new(query.clone()).with_page(cursor.page);

            let page = match self.searcher.search(&request).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(handle = handle, page = cursor.page, error = %e, "Sync fetch failed");
                    break SyncOutcome::FetchFailed {
                        page: cursor.page,
                        error: e.to_string(),
                    };
                }
            };

            if cursor.page == 1 {
                info!(handle = handle, total = page.count, "Solved problems reported upstream");
                upstream_count = Some(page.count);
            }

            if page.is_empty() {
                info!(handle = handle, synced = cursor.synced, "Sync complete");
                break SyncOutcome::Completed;
            }

            let now = Utc::now();
            let records: Vec<SolvedProblemRecord> = page
                .items
                .iter()
                .map(|item| SolvedProblemRecord::from_item(item, handle, now))
                .collect();

            if let Err((written, outcome)) = self.write_page(handle, cursor, &records) {
                partial = written;
                break outcome;
            }

            cursor.advance(records.len());
            info!(
                handle = handle,
                page = cursor.pages_done(),
                synced = cursor.synced,
                "Page synced"
            );

            tokio::time::sleep(self.config.page_delay()).await;
        };

        SyncReport {
            handle: handle.to_string(),
            pages: cursor.pages_done(),
            records: cursor.synced + partial,
            upstream_count,
            outcome,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Write one page in chunks. Stops at the first failed chunk and
    /// reports how many records landed before it.
    fn write_page(
        &self,
        handle: &str,
        cursor: SyncCursor,
        records: &[SolvedProblemRecord],
    ) -> Result<(), (usize, SyncOutcome)> {
        let mut written = 0;
        for (i, chunk) in records.chunks(self.batch_size()).enumerate() {
            if let Err(e) = self.store.put_batch(chunk) {
                error!(
                    handle = handle,
                    page = cursor.page,
                    chunk = i,
                    error = %e,
                    "Store write failed, stopping sync"
                );
                return Err((
                    written,
                    SyncOutcome::WriteFailed {
                        page: cursor.page,
                        error: e.to_string(),
                    },
                ));
            }
            written += chunk.len();
            debug!(
                handle = handle,
                page = cursor.page,
                chunk = i,
                size = chunk.len(),
                "Chunk written"
            );
        }
        Ok(())
    }
}
