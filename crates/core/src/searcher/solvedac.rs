//! solved.ac search backend implementation.
//!
//! solved.ac has no published rate limit but blocks clients that page
//! aggressively; callers that walk many pages must pace themselves.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SolvedAcConfig;

use super::{ProblemItem, ProblemQuery, ProblemSearcher, SearchError, SearchPage};

/// solved.ac `/search/problem` client.
pub struct SolvedAcSearcher {
    client: Client,
    base_url: String,
}

impl SolvedAcSearcher {
    /// Create a new searcher with the given configuration.
    pub fn new(config: SolvedAcConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .map_err(|e| SearchError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the request URL for a query.
    fn build_search_url(&self, query: &ProblemQuery) -> String {
        let mut url = format!(
            "{}/search/problem?query={}",
            self.base_url,
            urlencoding::encode(&query.query)
        );

        if let Some(page) = query.page {
            url.push_str(&format!("&page={}", page));
        }

        if let Some(sort) = query.sort {
            url.push_str(&format!("&sort={}", sort.as_str()));
        }

        url
    }
}

#[async_trait]
impl ProblemSearcher for SolvedAcSearcher {
    fn name(&self) -> &str {
        "solvedac"
    }

    async fn search(&self, query: &ProblemQuery) -> Result<SearchPage, SearchError> {
        let url = self.build_search_url(query);
        debug!(query = %query.query, page = ?query.page, "Searching solved.ac");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else if e.is_connect() {
                SearchError::ConnectionFailed(e.to_string())
            } else {
                SearchError::Internal(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Http {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        let page = parse_search_response(&body)?;

        debug!(
            query = %query.query,
            count = page.count,
            items = page.items.len(),
            "solved.ac search complete"
        );

        Ok(page)
    }
}

/// Parse a `/search/problem` body.
///
/// `count` and `items` are required. Items missing `problemId`, `titleKo`
/// or `level` are dropped with a warning rather than failing the page.
fn parse_search_response(body: &str) -> Result<SearchPage, SearchError> {
    let raw: RawSearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::ParseError(e.to_string()))?;

    let mut items = Vec::with_capacity(raw.items.len());
    for value in raw.items {
        match serde_json::from_value::<RawProblem>(value) {
            Ok(p) => items.push(ProblemItem {
                problem_id: p.problem_id,
                title: p.title_ko,
                level: p.level,
            }),
            Err(e) => warn!(error = %e, "Skipping malformed search item"),
        }
    }

    Ok(SearchPage {
        count: raw.count,
        items,
    })
}

// solved.ac API response types
#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    count: u64,
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProblem {
    problem_id: u32,
    title_ko: String,
    level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searcher::SearchSort;

    fn test_searcher(base_url: &str) -> SolvedAcSearcher {
        SolvedAcSearcher::new(SolvedAcConfig {
            base_url: base_url.to_string(),
            ..SolvedAcConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_build_search_url() {
        let searcher = test_searcher("https://solved.ac/api/v3");
        let query = ProblemQuery::new("tag:dp tier:1..5 s#100.. !s@alice");

        let url = searcher.build_search_url(&query);
        assert_eq!(
            url,
            "https://solved.ac/api/v3/search/problem?query=tag%3Adp%20tier%3A1..5%20s%23100..%20%21s%40alice"
        );
    }

    #[test]
    fn test_build_search_url_with_page_and_sort() {
        let searcher = test_searcher("http://localhost:9000/api/v3/"); // trailing slash
        let query = ProblemQuery::new("s@alice")
            .with_page(2)
            .with_sort(SearchSort::Random);

        let url = searcher.build_search_url(&query);
        assert!(url.starts_with("http://localhost:9000/api/v3/search/problem?query=s%40alice"));
        assert!(url.contains("&page=2"));
        assert!(url.ends_with("&sort=random"));
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "count": 2,
            "items": [
                {"problemId": 1000, "titleKo": "A+B", "level": 1, "acceptedUserCount": 250000},
                {"problemId": 1463, "titleKo": "1로 만들기", "level": 8}
            ]
        }"#;

        let page = parse_search_response(body).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].problem_id, 1463);
        assert_eq!(page.items[1].title, "1로 만들기");
        assert_eq!(page.items[1].level, 8);
    }

    #[test]
    fn test_parse_search_response_skips_malformed_items() {
        let body = r#"{
            "count": 3,
            "items": [
                {"problemId": 1000, "titleKo": "A+B", "level": 1},
                {"problemId": "oops", "titleKo": "bad id", "level": 1},
                {"problemId": 1001}
            ]
        }"#;

        let page = parse_search_response(body).unwrap();
        assert_eq!(page.count, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].problem_id, 1000);
    }

    #[test]
    fn test_parse_search_response_empty_page() {
        let page = parse_search_response(r#"{"count": 0, "items": []}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_parse_search_response_missing_count() {
        let result = parse_search_response(r#"{"items": []}"#);
        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }

    #[test]
    fn test_parse_search_response_not_json() {
        let result = parse_search_response("<html>blocked</html>");
        assert!(matches!(result, Err(SearchError::ParseError(_))));
    }
}
