//! Types for the syncer.

use serde::{Deserialize, Serialize};

/// Pagination state for one sync pass over one solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncCursor {
    /// Next page to fetch (1-based).
    pub page: u32,
    /// Records written so far.
    pub synced: usize,
}

impl SyncCursor {
    pub fn new() -> Self {
        Self { page: 1, synced: 0 }
    }

    /// Pages fully written so far.
    pub fn pages_done(&self) -> u32 {
        self.page - 1
    }

    /// Record a fully written page and move to the next one.
    pub fn advance(&mut self, written: usize) {
        self.synced += written;
        self.page += 1;
    }
}

impl Default for SyncCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// How a sync pass ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// An empty page was reached; the full history is in the store.
    Completed,
    /// Fetching `page` failed. Earlier pages are in the store.
    FetchFailed { page: u32, error: String },
    /// A store write for `page` failed. Earlier pages, and earlier chunks
    /// of this page, are in the store.
    WriteFailed { page: u32, error: String },
}

/// Result of syncing one solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub handle: String,
    /// Pages fully written.
    pub pages: u32,
    /// Records written, counting partially written pages.
    pub records: usize,
    /// Total reported by the search backend on the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_count: Option<u64>,
    pub outcome: SyncOutcome,
    pub duration_ms: u64,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        self.outcome == SyncOutcome::Completed
    }
}
