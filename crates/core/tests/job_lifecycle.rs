//! Daily job lifecycle tests: sync, then select, then notify.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use dailyps_core::searcher::{ProblemSearcher, SearchPage};
use dailyps_core::selector::{ProblemSelector, SelectorConfig};
use dailyps_core::store::{SolvedProblemStore, SqliteSolvedStore};
use dailyps_core::sync::{SyncConfig, SyncOutcome, Syncer};
use dailyps_core::testing::{fixtures, MockNotifier, MockProblemSearcher};
use dailyps_core::{DailyJob, JobStatus, Notifier};

struct TestHarness {
    searcher: Arc<MockProblemSearcher>,
    store: Arc<SqliteSolvedStore>,
    notifier: Arc<MockNotifier>,
    _temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(
            SqliteSolvedStore::new(&temp_dir.path().join("solved.db"))
                .expect("Failed to open store"),
        );
        Self {
            searcher: Arc::new(MockProblemSearcher::new()),
            store,
            notifier: Arc::new(MockNotifier::new()),
            _temp_dir: temp_dir,
        }
    }

    fn job(&self) -> DailyJob {
        let solvers = fixtures::solvers(2);
        let searcher = Arc::clone(&self.searcher) as Arc<dyn ProblemSearcher>;
        let store = Arc::clone(&self.store) as Arc<dyn SolvedProblemStore>;
        let sync_config = SyncConfig {
            page_delay_ms: 1,
            ..SyncConfig::default()
        };

        DailyJob::new(
            Syncer::new(Arc::clone(&searcher), Arc::clone(&store), sync_config),
            ProblemSelector::new(
                searcher,
                store,
                vec![fixtures::pool_entry("greedy")],
                solvers.clone(),
                SelectorConfig::default(),
            ),
            Arc::clone(&self.notifier) as Arc<dyn Notifier>,
            solvers,
        )
    }
}

#[tokio::test]
async fn synced_problems_are_never_published() {
    let harness = TestHarness::new();
    // handle0 solved 1..=3; the selector's searches return 1..=8.
    harness
        .searcher
        .set_handler(|q| {
            if q.query == "s@handle0" && q.page == Some(1) {
                Ok(SearchPage::new(3, fixtures::problem_items(1..4)))
            } else if q.query.starts_with("s@") {
                Ok(SearchPage::default())
            } else {
                Ok(SearchPage::new(8, fixtures::problem_items(1..9)))
            }
        })
        .await;

    let mut rng = StdRng::seed_from_u64(2026);
    let report = harness.job().run_with_rng(&mut rng).await;

    assert_eq!(report.status, JobStatus::Published);
    assert_eq!(report.sync_reports.len(), 2);
    assert_eq!(report.sync_reports[0].records, 3);
    assert_eq!(report.selection.len(), 5);
    assert_eq!(report.selection.attempts, 1);

    let deliveries = harness.notifier.deliveries().await;
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0], report.selection.problems);
    for problem in &deliveries[0] {
        assert!(!["1", "2", "3"].contains(&problem.id.as_str()));
        assert_eq!(problem.tag, "GREEDY");
        assert_eq!(problem.tier, "S3");
    }
}

#[tokio::test]
async fn partial_sync_still_selects() {
    let harness = TestHarness::new();
    harness
        .searcher
        .set_handler(|q| {
            if q.query == "s@handle1" {
                Err(dailyps_core::SearchError::Http {
                    status: 429,
                    message: "Too Many Requests".to_string(),
                })
            } else if q.query.starts_with("s@") {
                Ok(SearchPage::default())
            } else {
                Ok(SearchPage::new(2, fixtures::problem_items(500..502)))
            }
        })
        .await;

    let mut rng = StdRng::seed_from_u64(5);
    let report = harness.job().run_with_rng(&mut rng).await;

    assert!(report.sync_reports[0].is_complete());
    assert!(matches!(
        report.sync_reports[1].outcome,
        SyncOutcome::FetchFailed { page: 1, .. }
    ));
    assert_eq!(report.incomplete_syncs().count(), 1);

    // Only two distinct problems exist, so the quota can't be met.
    assert_eq!(report.selection.len(), 2);
    assert_eq!(report.selection.attempts, 15);
    assert_eq!(report.status, JobStatus::Published);
    assert_eq!(harness.notifier.delivery_count().await, 1);
}

#[tokio::test]
async fn each_run_gets_its_own_id() {
    let harness = TestHarness::new();
    let job = harness.job();

    let first = job.run().await;
    let second = job.run().await;

    assert_eq!(first.status, JobStatus::NothingSelected);
    assert_ne!(first.run_id, second.run_id);
    assert_eq!(harness.notifier.delivery_count().await, 0);
}
