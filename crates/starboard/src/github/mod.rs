//! GitHub search API client.
//!
//! This module covers the one outbound interface the harvester needs:
//! a bounded, paginated repository search query scoped to a language and
//! a star-count window.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for search API operations
//! - [`types`] - Decoded wire types for a result page
//! - [`client`] - Client creation and the single-page fetch
//! - [`convert`] - Projection from raw items to retained summaries

mod client;
mod convert;
mod error;
mod types;

// Re-export error types
pub use error::SearchError;

// Re-export client types and the harvester-facing seam
pub use client::{RepoSearch, SEARCH_ENDPOINT, SearchClient};

// Re-export wire types
pub use types::{ItemLicense, ItemOwner, SearchItem, SearchPage};

// Re-export the summary projection
pub use convert::to_summary;
