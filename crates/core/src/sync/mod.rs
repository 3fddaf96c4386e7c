//! Solved-history synchronization.
//!
//! Walks a solver's solved problems page by page and upserts them into the
//! solved-problem store in bounded batches.

mod config;
mod syncer;
mod types;

pub use config::SyncConfig;
pub use syncer::Syncer;
pub use types::{SyncCursor, SyncOutcome, SyncReport};
