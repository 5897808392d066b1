//! Decoded wire types for a search result page.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of search results, with the service's total-count hint.
///
/// The hint counts every match of the query, not just the portion the
/// service will actually let a client page through.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    /// Total matches reported by the service.
    pub total_count: u64,
    /// The items on this page, sorted by star count descending.
    pub items: Vec<SearchItem>,
}

/// A repository as returned by the search endpoint.
///
/// Only the fields the harvester retains are decoded; the rest of the
/// response body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: u64,
    pub node_id: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<ItemOwner>,
    pub stargazers_count: u64,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub license: Option<ItemLicense>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Owner subset: only the avatar is retained.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemOwner {
    #[serde(default)]
    pub avatar_url: String,
}

/// License subset: only the SPDX identifier is retained.
///
/// The service reports `null` for unrecognized licenses and the literal
/// string `NOASSERTION` for unclear ones; both pass through as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemLicense {
    #[serde(default)]
    pub spdx_id: Option<String>,
}
