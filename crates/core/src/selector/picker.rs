//! Problem selector implementation.
//!
//! Each attempt is an independent sample: pick a pool entry, pick a band,
//! search one randomly sorted page, then admit unseen problems in the order
//! the backend returned them. Search failures and empty pages just use up
//! the attempt. There is no backoff between attempts.

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::config::TrackedSolver;
use crate::searcher::{ProblemItem, ProblemQuery, ProblemSearcher, QueryBuilder, SearchSort};
use crate::store::SolvedProblemStore;
use crate::tier::{self, TierRank};

use super::config::SelectorConfig;
use super::pool::{Band, CandidatePoolEntry};
use super::types::{SelectedProblem, Selection};

/// Picks a batch of problems no tracked solver has solved.
pub struct ProblemSelector {
    searcher: Arc<dyn ProblemSearcher>,
    store: Arc<dyn SolvedProblemStore>,
    pool: Vec<CandidatePoolEntry>,
    solvers: Vec<TrackedSolver>,
    config: SelectorConfig,
}

/// Problems seen so far in one run.
#[derive(Default)]
struct RunState {
    selected: Vec<SelectedProblem>,
    /// Ids admitted into `selected`.
    admitted: HashSet<u32>,
    /// Ids found in the store; never looked up again this run.
    excluded: HashSet<u32>,
}

impl ProblemSelector {
    pub fn new(
        searcher: Arc<dyn ProblemSearcher>,
        store: Arc<dyn SolvedProblemStore>,
        pool: Vec<CandidatePoolEntry>,
        solvers: Vec<TrackedSolver>,
        config: SelectorConfig,
    ) -> Self {
        Self {
            searcher,
            store,
            pool,
            solvers,
            config,
        }
    }

    /// Select using a freshly seeded generator.
    pub async fn select_random(&self) -> Selection {
        let mut rng = StdRng::from_os_rng();
        self.select(&mut rng).await
    }

    /// Run the selection loop.
    ///
    /// Always returns; an empty or partial [`Selection`] means the attempt
    /// budget ran out. The returned problems are shuffled so the order the
    /// searches happened to run in does not carry into the published order.
    pub async fn select<R: Rng + Send + ?Sized>(&self, rng: &mut R) -> Selection {
        let quota = self.config.quota;
        let mut state = RunState::default();
        let mut attempts = 0;

        if self.pool.is_empty() {
            warn!("Candidate pool is empty, nothing to select");
            return Selection {
                problems: Vec::new(),
                attempts,
                quota,
            };
        }

        while state.selected.len() < quota && attempts < self.config.max_attempts {
            attempts += 1;

            let Some(entry) = self.pool.choose(rng) else {
                break;
            };
            let band = Band::sample(rng);
            let (min, max) = entry.band(band).ranks();

            let request = ProblemQuery::new(self.build_query(entry, min, max))
                .with_sort(SearchSort::Random);

            let page = match self.searcher.search(&request).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        attempt = attempts,
                        tag = %entry.tag,
                        error = %e,
                        "Search failed, abandoning attempt"
                    );
                    continue;
                }
            };

            if page.is_empty() {
                debug!(attempt = attempts, tag = %entry.tag, %band, "No candidates");
                continue;
            }

            let admitted = self.admit(&page.items, entry, &mut state);
            info!(
                attempt = attempts,
                tag = %entry.tag,
                %band,
                tier_min = min,
                tier_max = max,
                candidates = page.items.len(),
                admitted = admitted,
                selected = state.selected.len(),
                "Selection attempt finished"
            );
        }

        let mut problems = state.selected;
        problems.shuffle(rng);

        Selection {
            problems,
            attempts,
            quota,
        }
    }

    /// Query for one attempt: tag, tier range, popularity floor and one
    /// exclusion clause per tracked solver.
    fn build_query(&self, entry: &CandidatePoolEntry, min: TierRank, max: TierRank) -> String {
        QueryBuilder::new()
            .tag(&entry.tag)
            .tier_range(min, max)
            .min_solvers(entry.min_participants)
            .not_solved_by(self.solvers.iter().map(|s| s.handle.as_str()))
            .build()
    }

    /// Scan candidates in order and admit those not yet seen and not in the
    /// store. Returns how many were admitted.
    fn admit(
        &self,
        items: &[ProblemItem],
        entry: &CandidatePoolEntry,
        state: &mut RunState,
    ) -> usize {
        let mut admitted = 0;

        for item in items {
            if state.selected.len() >= self.config.quota {
                break;
            }

            if state.admitted.contains(&item.problem_id)
                || state.excluded.contains(&item.problem_id)
            {
                continue;
            }

            let key = item.key();
            match self.store.contains(&key) {
                Ok(false) => {
                    state.admitted.insert(item.problem_id);
                    state.selected.push(SelectedProblem {
                        id: key,
                        title: item.title.clone(),
                        tier: tier::display_label(item.level),
                        tag: entry.tag.to_uppercase(),
                    });
                    admitted += 1;
                }
                Ok(true) => {
                    debug!(problem_id = %key, "Already solved, skipping");
                    state.excluded.insert(item.problem_id);
                }
                Err(e) => {
                    // Can't prove it's unseen, so leave it out.
                    warn!(
                        problem_id = %key,
                        error = %e,
                        "Store lookup failed, skipping candidate"
                    );
                }
            }
        }

        admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searcher::SearchPage;
    use crate::testing::{fixtures, MockProblemSearcher, MockSolvedStore};

    fn selector(
        searcher: Arc<MockProblemSearcher>,
        store: Arc<MockSolvedStore>,
        solvers: Vec<TrackedSolver>,
    ) -> ProblemSelector {
        ProblemSelector::new(
            searcher,
            store,
            vec![fixtures::pool_entry("dp")],
            solvers,
            SelectorConfig::default(),
        )
    }

    #[test]
    fn test_build_query_excludes_every_solver() {
        let selector = selector(
            Arc::new(MockProblemSearcher::new()),
            Arc::new(MockSolvedStore::new()),
            vec![
                TrackedSolver::new("KII1ua", "skfnx13"),
                TrackedSolver::new("Eunjin3395", "jennyeunjin"),
            ],
        );

        let entry = fixtures::pool_entry("dp");
        let query = selector.build_query(&entry, 11, 15);
        assert_eq!(query, "tag:dp tier:11..15 s#100.. !s@skfnx13 !s@jennyeunjin");
    }

    #[tokio::test]
    async fn test_select_requests_random_sort() {
        let searcher = Arc::new(MockProblemSearcher::new());
        searcher
            .push_page(SearchPage::new(5, fixtures::problem_items(1000..1005)))
            .await;
        let selector = selector(
            Arc::clone(&searcher),
            Arc::new(MockSolvedStore::new()),
            vec![TrackedSolver::new("a", "a1")],
        );

        let mut rng = StdRng::seed_from_u64(1);
        selector.select(&mut rng).await;

        let searches = searcher.recorded_searches().await;
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].sort, Some(SearchSort::Random));
        assert!(searches[0].page.is_none());
        assert!(searches[0].query.starts_with("tag:dp tier:"));
        assert!(searches[0].query.ends_with("s#100.. !s@a1"));
    }

    #[tokio::test]
    async fn test_admitted_problem_uses_reported_tier() {
        let searcher = Arc::new(MockProblemSearcher::new());
        searcher
            .push_page(SearchPage::new(1, vec![fixtures::problem_item(2000, 13)]))
            .await;
        let selector = selector(
            Arc::clone(&searcher),
            Arc::new(MockSolvedStore::new()),
            vec![TrackedSolver::new("a", "a1")],
        );

        let mut rng = StdRng::seed_from_u64(3);
        let selection = selector.select(&mut rng).await;

        assert_eq!(selection.problems[0].id, "2000");
        assert_eq!(selection.problems[0].tier, "G3");
        assert_eq!(selection.problems[0].tag, "DP");
    }

    #[tokio::test]
    async fn test_store_error_skips_candidate() {
        let searcher = Arc::new(MockProblemSearcher::new());
        searcher
            .set_handler(|_| Ok(SearchPage::new(2, fixtures::problem_items(3000..3002))))
            .await;
        let store = Arc::new(MockSolvedStore::new());
        store.fail_lookups_for("3000");

        let selector = selector(
            Arc::clone(&searcher),
            Arc::clone(&store),
            vec![TrackedSolver::new("a", "a1")],
        );

        let mut rng = StdRng::seed_from_u64(5);
        let selection = selector.select(&mut rng).await;

        let ids: Vec<&str> = selection.problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3001"]);
        assert_eq!(selection.attempts, 15);
    }

    #[tokio::test]
    async fn test_excluded_ids_looked_up_once() {
        let searcher = Arc::new(MockProblemSearcher::new());
        searcher
            .set_handler(|_| Ok(SearchPage::new(1, vec![fixtures::problem_item(4000, 8)])))
            .await;
        let store = Arc::new(MockSolvedStore::new());
        store.insert(fixtures::solved_record("4000", "a1"));

        let selector = selector(
            Arc::clone(&searcher),
            Arc::clone(&store),
            vec![TrackedSolver::new("a", "a1")],
        );

        let mut rng = StdRng::seed_from_u64(9);
        let selection = selector.select(&mut rng).await;

        assert!(selection.is_empty());
        assert_eq!(searcher.search_count().await, 15);
        assert_eq!(store.lookup_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_pool_returns_without_searching() {
        let searcher = Arc::new(MockProblemSearcher::new());
        let selector = ProblemSelector::new(
            Arc::clone(&searcher) as Arc<dyn ProblemSearcher>,
            Arc::new(MockSolvedStore::new()),
            vec![],
            vec![TrackedSolver::new("a", "a1")],
            SelectorConfig::default(),
        );

        let selection = selector.select_random().await;
        assert!(selection.is_empty());
        assert_eq!(selection.attempts, 0);
        assert_eq!(searcher.search_count().await, 0);
    }
}
