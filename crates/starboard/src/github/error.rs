//! Search API error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when querying the search API.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API token was configured. Fatal at startup; nothing to retry.
    #[error("no GitHub token configured (set [github] token or GITHUB_TOKEN)")]
    MissingToken,

    /// The service answered with a non-success status.
    #[error("search request failed with status {status}")]
    Status { status: StatusCode },

    /// The response body could not be decoded into a result page.
    #[error("decoding search response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request could not be completed.
    #[error("search request failed: {0}")]
    Network(#[source] reqwest::Error),
}

impl SearchError {
    /// Check if this error is worth retrying: throttling or a server-side
    /// failure that tends to clear on its own.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Status { status } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
