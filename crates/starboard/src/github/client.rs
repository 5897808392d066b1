//! Search API client creation and the single-page fetch.

use std::time::Duration;

use async_trait::async_trait;
use backon::Retryable;
use reqwest::StatusCode;

use super::error::SearchError;
use super::types::SearchPage;
use crate::harvest::SearchWindow;
use crate::retry::default_backoff;

/// Endpoint for repository search.
pub const SEARCH_ENDPOINT: &str = "https://api.github.com/search/repositories";

/// Per-request timeout for search calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues one bounded query against a repository search service.
///
/// The harvester drives implementations of this trait; production code
/// uses [`SearchClient`], tests substitute scripted fakes.
#[async_trait]
pub trait RepoSearch {
    /// Fetch one page of the given star window.
    async fn search(&self, window: &SearchWindow) -> Result<SearchPage, SearchError>;
}

/// Authenticated client for the repository search endpoint.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    language: String,
}

impl SearchClient {
    /// Create a client that searches repositories of `language`.
    pub fn new(token: &str, language: &str) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(SearchError::Network)?;

        Ok(Self {
            http,
            endpoint: SEARCH_ENDPOINT.to_string(),
            token: token.to_string(),
            language: language.to_string(),
        })
    }

    /// Point the client at a different endpoint. Used by tests to target a
    /// mock server.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Issue one search request and decode the result page.
    ///
    /// Star ranges use the service's three-dot form (`stars:200...1000000`,
    /// inclusive on both ends), sorted by star count descending so pages
    /// arrive highest-starred first.
    async fn fetch_page(&self, window: &SearchWindow) -> Result<SearchPage, SearchError> {
        let query = format!(
            "language:{} stars:{}...{}",
            self.language, window.min_stars, window.max_stars
        );
        let per_page = window.per_page.to_string();
        let page = window.page.to_string();

        let response = self
            .http
            .get(&self.endpoint)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "starboard")
            .header("Authorization", format!("Bearer {}", self.token))
            .query(&[
                ("q", query.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await
            .map_err(SearchError::Network)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SearchError::Status { status });
        }

        let body = response.text().await.map_err(SearchError::Network)?;
        serde_json::from_str(&body).map_err(SearchError::Decode)
    }
}

#[async_trait]
impl RepoSearch for SearchClient {
    async fn search(&self, window: &SearchWindow) -> Result<SearchPage, SearchError> {
        (|| self.fetch_page(window))
            .retry(default_backoff())
            .when(SearchError::is_transient)
            .notify(|err, dur| {
                tracing::debug!(
                    error = %err,
                    retry_in_ms = dur.as_millis() as u64,
                    "retrying search request"
                );
            })
            .await
    }
}
