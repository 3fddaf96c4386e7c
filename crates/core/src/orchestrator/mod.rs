//! Daily job orchestration.
//!
//! One run, strictly in order:
//! - **Sync**: every tracked solver's solved history into the store
//! - **Select**: the randomized retry loop against the refreshed store
//! - **Notify**: deliver the batch, skipped when nothing was selected

mod runner;
mod types;

pub use runner::DailyJob;
pub use types::{JobReport, JobStatus};
