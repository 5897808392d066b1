//! Starboard - a star-ranked repository harvester and discovery server.
//!
//! This library collects every public repository of a language above a
//! star-count floor from the GitHub search API, even though a single search
//! query only exposes its first thousand results. It pages through
//! progressively narrower star-count windows, deduplicates along the way,
//! ranks the result, and persists it as a single JSON snapshot that the
//! serving side loads wholesale and samples from.
//!
//! # Example
//!
//! ```ignore
//! use starboard::github::SearchClient;
//! use starboard::harvest::{harvest, HarvestParams};
//! use starboard::snapshot::Snapshot;
//!
//! let client = SearchClient::new(&token, "rust")?;
//! let report = harvest(&client, &HarvestParams::default()).await?;
//! Snapshot::new(report.repos).write(Path::new("repos.json"))?;
//! ```

pub mod github;
pub mod harvest;
pub mod retry;
pub mod sample;
pub mod serve;
pub mod snapshot;

pub use github::{RepoSearch, SearchClient, SearchError};
pub use harvest::{HarvestParams, HarvestReport, SearchWindow, harvest};
pub use sample::{SampleError, sample, sample_with};
pub use serve::ServeState;
pub use snapshot::{RepoSummary, Snapshot, SnapshotError, rank};
