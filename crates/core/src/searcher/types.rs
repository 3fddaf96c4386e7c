//! Types for the problem search system.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tier::TierRank;

/// Parameters for one search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemQuery {
    /// Query in the search grammar, e.g. `tag:dp tier:11..15 s#100..`.
    pub query: String,
    /// 1-based page number. The backend defaults to page 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Result ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
}

impl ProblemQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: None,
            sort: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_sort(mut self, sort: SearchSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Result ordering requested from the search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSort {
    Random,
}

impl SearchSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchSort::Random => "random",
        }
    }
}

/// A problem as reported by the search backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemItem {
    pub problem_id: u32,
    pub title: String,
    /// Difficulty level on the tier scale.
    pub level: TierRank,
}

impl ProblemItem {
    /// Store key for this problem.
    pub fn key(&self) -> String {
        self.problem_id.to_string()
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    /// Total matches across all pages.
    pub count: u64,
    /// Well-formed items on this page, in backend order.
    pub items: Vec<ProblemItem>,
}

impl SearchPage {
    pub fn new(count: u64, items: Vec<ProblemItem>) -> Self {
        Self { count, items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search backend connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Search backend returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse search response: {0}")]
    ParseError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Trait for problem search backends.
#[async_trait]
pub trait ProblemSearcher: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Fetch one page of results for a query.
    async fn search(&self, query: &ProblemQuery) -> Result<SearchPage, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_query_builder() {
        let query = ProblemQuery::new("s@alice")
            .with_page(3)
            .with_sort(SearchSort::Random);

        assert_eq!(query.query, "s@alice");
        assert_eq!(query.page, Some(3));
        assert_eq!(query.sort, Some(SearchSort::Random));
    }

    #[test]
    fn test_problem_query_minimal_serialization() {
        let json = serde_json::to_string(&ProblemQuery::new("tag:dp")).unwrap();
        assert!(!json.contains("page"));
        assert!(!json.contains("sort"));
    }

    #[test]
    fn test_search_sort_as_str() {
        assert_eq!(SearchSort::Random.as_str(), "random");
    }

    #[test]
    fn test_problem_item_key() {
        let item = ProblemItem {
            problem_id: 1000,
            title: "A+B".to_string(),
            level: 1,
        };
        assert_eq!(item.key(), "1000");
    }
}
