//! Mock problem searcher for testing.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::searcher::{ProblemQuery, ProblemSearcher, SearchError, SearchPage};

/// Produces a response from the request when nothing is scripted.
type QueryHandler = Box<dyn Fn(&ProblemQuery) -> Result<SearchPage, SearchError> + Send + Sync>;

/// Mock implementation of [`ProblemSearcher`].
///
/// Responses come from, in order:
/// 1. the scripted queue (`push_page` / `push_error`), one entry per call
/// 2. the handler set with `set_handler`
/// 3. an empty page
///
/// Every request is recorded, including ones that fail.
///
/// ```rust,ignore
/// let searcher = MockProblemSearcher::new();
/// searcher.push_page(SearchPage::new(2, fixtures::problem_items(1000..1002))).await;
/// searcher.push_error(SearchError::Timeout).await;
/// ```
pub struct MockProblemSearcher {
    scripted: Arc<RwLock<VecDeque<Result<SearchPage, SearchError>>>>,
    handler: Arc<RwLock<Option<QueryHandler>>>,
    searches: Arc<RwLock<Vec<ProblemQuery>>>,
}

impl std::fmt::Debug for MockProblemSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockProblemSearcher")
            .field("scripted", &"<scripted>")
            .field("handler", &"<handler>")
            .field("searches", &"<searches>")
            .finish()
    }
}

impl Default for MockProblemSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProblemSearcher {
    pub fn new() -> Self {
        Self {
            scripted: Arc::new(RwLock::new(VecDeque::new())),
            handler: Arc::new(RwLock::new(None)),
            searches: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Queue a page for the next unanswered search.
    pub async fn push_page(&self, page: SearchPage) {
        self.scripted.write().await.push_back(Ok(page));
    }

    /// Queue a failure for the next unanswered search.
    pub async fn push_error(&self, error: SearchError) {
        self.scripted.write().await.push_back(Err(error));
    }

    /// Answer unscripted searches with `handler`.
    pub async fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&ProblemQuery) -> Result<SearchPage, SearchError> + Send + Sync + 'static,
    {
        *self.handler.write().await = Some(Box::new(handler));
    }

    /// Requests seen so far, oldest first.
    pub async fn recorded_searches(&self) -> Vec<ProblemQuery> {
        self.searches.read().await.clone()
    }

    pub async fn search_count(&self) -> usize {
        self.searches.read().await.len()
    }
}

#[async_trait]
impl ProblemSearcher for MockProblemSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, query: &ProblemQuery) -> Result<SearchPage, SearchError> {
        self.searches.write().await.push(query.clone());

        if let Some(scripted) = self.scripted.write().await.pop_front() {
            return scripted;
        }

        let handler = self.handler.read().await;
        match handler.as_ref() {
            Some(h) => h(query),
            None => Ok(SearchPage::default()),
        }
    }
}
