//! Daily job runner.

use std::sync::Arc;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::TrackedSolver;
use crate::notifier::Notifier;
use crate::selector::ProblemSelector;
use crate::sync::Syncer;

use super::types::{JobReport, JobStatus};

/// Sync, select and notify, once.
pub struct DailyJob {
    syncer: Syncer,
    selector: ProblemSelector,
    notifier: Arc<dyn Notifier>,
    solvers: Vec<TrackedSolver>,
}

impl DailyJob {
    pub fn new(
        syncer: Syncer,
        selector: ProblemSelector,
        notifier: Arc<dyn Notifier>,
        solvers: Vec<TrackedSolver>,
    ) -> Self {
        Self {
            syncer,
            selector,
            notifier,
            solvers,
        }
    }

    /// Run once with a freshly seeded generator.
    pub async fn run(&self) -> JobReport {
        let mut rng = StdRng::from_os_rng();
        self.run_with_rng(&mut rng).await
    }

    /// Run once. Failures along the way end up in the report; this never
    /// returns an error.
    pub async fn run_with_rng<R: Rng + Send + ?Sized>(&self, rng: &mut R) -> JobReport {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!("daily_job", run_id = %run_id);
        self.run_inner(run_id, rng).instrument(span).await
    }

    async fn run_inner<R: Rng + Send + ?Sized>(&self, run_id: String, rng: &mut R) -> JobReport {
        let started_at = Utc::now();
        info!(solvers = self.solvers.len(), "Daily job started");

        let sync_reports = self.syncer.sync_all(&self.solvers).await;
        for report in sync_reports.iter().filter(|r| !r.is_complete()) {
            warn!(
                handle = %report.handle,
                pages = report.pages,
                outcome = ?report.outcome,
                "Sync ended early, selecting against partial history"
            );
        }

        let selection = self.selector.select(rng).await;
        info!(
            selected = selection.len(),
            attempts = selection.attempts,
            status = ?selection.status(),
            "Selection finished"
        );

        let (status, notify_error) = if selection.is_empty() {
            warn!("Nothing selected, skipping notification");
            (JobStatus::NothingSelected, None)
        } else {
            match self.notifier.notify(&selection.problems).await {
                Ok(()) => (JobStatus::Published, None),
                Err(e) => {
                    error!(notifier = self.notifier.name(), error = %e, "Notification failed");
                    (JobStatus::NotificationFailed, Some(e.to_string()))
                }
            }
        };

        info!(%status, "Daily job finished");

        JobReport {
            run_id,
            started_at,
            sync_reports,
            selection,
            notifier: self.notifier.name().to_string(),
            notify_error,
            status,
        }
    }
}
