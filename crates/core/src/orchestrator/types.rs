//! Types for the daily job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::selector::Selection;
use crate::sync::SyncReport;

/// Terminal status of one daily run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// A non-empty selection was delivered.
    Published,
    /// The attempt budget ran out with nothing to deliver.
    NothingSelected,
    /// A selection was made but delivery failed.
    NotificationFailed,
}

impl JobStatus {
    /// Whether the run should count as a failure to the caller.
    pub fn is_failure(&self) -> bool {
        matches!(self, JobStatus::NotificationFailed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Published => write!(f, "published"),
            JobStatus::NothingSelected => write!(f, "nothing_selected"),
            JobStatus::NotificationFailed => write!(f, "notification_failed"),
        }
    }
}

/// Everything one daily run did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    /// UUID v4 identifying this run in logs.
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    /// One report per tracked solver, in configuration order.
    pub sync_reports: Vec<SyncReport>,
    pub selection: Selection,
    /// Channel the selection went to.
    pub notifier: String,
    /// Delivery error, when delivery failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_error: Option<String>,
    pub status: JobStatus,
}

impl JobReport {
    /// Solvers whose sync ended early.
    pub fn incomplete_syncs(&self) -> impl Iterator<Item = &SyncReport> {
        self.sync_reports.iter().filter(|r| !r.is_complete())
    }
}
