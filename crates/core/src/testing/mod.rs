//! Testing utilities and mock implementations.
//!
//! Mocks for every external seam (search backend, solved-problem store and
//! notification channel) so selection, sync and the daily job can be
//! exercised without network or disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use dailyps_core::testing::{fixtures, MockProblemSearcher, MockSolvedStore};
//!
//! let searcher = MockProblemSearcher::new();
//! searcher.push_page(SearchPage::new(5, fixtures::problem_items(1000..1005))).await;
//!
//! let store = MockSolvedStore::new();
//! store.insert(fixtures::solved_record("1000", "skfnx13"));
//! ```

mod mock_notifier;
mod mock_searcher;
mod mock_store;

pub use mock_notifier::MockNotifier;
pub use mock_searcher::MockProblemSearcher;
pub use mock_store::MockSolvedStore;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::ops::Range;

    use chrono::{TimeZone, Utc};

    use crate::config::TrackedSolver;
    use crate::searcher::ProblemItem;
    use crate::selector::{BandLevels, CandidatePoolEntry, TierBand};
    use crate::store::{ProblemStatus, SolvedProblemRecord};
    use crate::tier::TierRank;

    /// Pool entry for `tag` with bands B5..B1 / G5..G1 and a floor of 100
    /// solvers.
    pub fn pool_entry(tag: &str) -> CandidatePoolEntry {
        CandidatePoolEntry {
            tag: tag.to_string(),
            level: BandLevels {
                low: TierBand::new("B5", "B1"),
                high: TierBand::new("G5", "G1"),
            },
            min_participants: 100,
        }
    }

    /// A search hit with a generated title.
    pub fn problem_item(problem_id: u32, level: TierRank) -> ProblemItem {
        ProblemItem {
            problem_id,
            title: format!("Problem {}", problem_id),
            level,
        }
    }

    /// Consecutive search hits, all at S3.
    pub fn problem_items(ids: Range<u32>) -> Vec<ProblemItem> {
        ids.map(|id| problem_item(id, 8)).collect()
    }

    /// A stored record for `problem_id` owned by `owner`.
    pub fn solved_record(problem_id: &str, owner: &str) -> SolvedProblemRecord {
        SolvedProblemRecord {
            problem_id: problem_id.to_string(),
            title: format!("Problem {}", problem_id),
            tier: "S3".to_string(),
            owner: owner.to_string(),
            status: ProblemStatus::SolvedByMember,
            synced_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap_or_default(),
        }
    }

    /// Tracked solvers `member0..memberN` with handles `handle0..handleN`.
    pub fn solvers(n: usize) -> Vec<TrackedSolver> {
        (0..n)
            .map(|i| TrackedSolver::new(format!("member{}", i), format!("handle{}", i)))
            .collect()
    }
}
