//! Syncer configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::store::MAX_BATCH_WRITE;

/// Configuration for the solved-history syncer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Pause between page fetches (milliseconds).
    /// solved.ac throttles clients that page without pausing.
    #[serde(default = "default_page_delay")]
    pub page_delay_ms: u64,

    /// Records per store write, at most the store's batch limit.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_page_delay() -> u64 {
    300
}

fn default_batch_size() -> usize {
    MAX_BATCH_WRITE
}

impl SyncConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: default_page_delay(),
            batch_size: default_batch_size(),
        }
    }
}
