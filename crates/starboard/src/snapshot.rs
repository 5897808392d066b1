//! Snapshot model, ranking, and whole-file persistence.
//!
//! A harvest run produces exactly one snapshot: a single JSON document with
//! a top-level `data` array holding the ranked summaries. The file is
//! written whole and read whole; the serving side never streams or patches
//! it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while persisting or loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be created or written.
    #[error("writing snapshot to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The snapshot file could not be read.
    #[error("reading snapshot from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The summaries could not be serialized.
    #[error("encoding snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// The file contents are not a valid snapshot document.
    #[error("decoding snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// The retained projection of a fetched repository.
///
/// Created when a repository is first seen during harvesting and never
/// mutated afterwards; a repository seen again is skipped entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub node_id: String,
    pub full_name: String,
    pub description: String,
    pub avatar_url: String,
    pub stargazers_count: u64,
    pub archived: bool,
    pub license_spdx_id: String,
    #[serde(with = "rfc3339_seconds")]
    pub created_at: DateTime<Utc>,
    pub topics: Vec<String>,
}

/// The durable artifact of a harvest run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub data: Vec<RepoSummary>,
}

impl Snapshot {
    /// Rank the given summaries and wrap them as a snapshot.
    pub fn new(mut repos: Vec<RepoSummary>) -> Self {
        rank(&mut repos);
        Self { data: repos }
    }

    /// Serialize the whole document and replace whatever is at `path`.
    pub fn write(&self, path: &Path) -> Result<(), SnapshotError> {
        let body = serde_json::to_vec_pretty(self).map_err(SnapshotError::Encode)?;
        fs::write(path, body).map_err(|source| SnapshotError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a snapshot wholesale.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let body = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&body).map_err(SnapshotError::Decode)
    }
}

/// Total order for display: star count descending, then creation time
/// ascending (older first). The sort is stable, so summaries equal on both
/// keys keep their insertion order.
pub fn rank(repos: &mut [RepoSummary]) {
    repos.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

/// RFC 3339 timestamps at second precision, always UTC.
mod rfc3339_seconds {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn summary(id: u64, stars: u64, created_epoch: i64) -> RepoSummary {
        RepoSummary {
            id,
            node_id: format!("R_{id}"),
            full_name: format!("owner/repo-{id}"),
            description: format!("repository {id}"),
            avatar_url: format!("https://avatars.test/{id}"),
            stargazers_count: stars,
            archived: false,
            license_spdx_id: "MIT".to_string(),
            created_at: DateTime::from_timestamp(created_epoch, 0).unwrap(),
            topics: vec!["tooling".to_string()],
        }
    }

    #[test]
    fn test_rank_orders_by_stars_descending() {
        let mut repos = vec![
            summary(1, 300, 100),
            summary(2, 900, 100),
            summary(3, 500, 100),
        ];
        rank(&mut repos);

        let stars: Vec<u64> = repos.iter().map(|r| r.stargazers_count).collect();
        assert_eq!(stars, vec![900, 500, 300]);
    }

    #[test]
    fn test_rank_breaks_star_ties_by_age() {
        let mut repos = vec![
            summary(1, 500, 3_000),
            summary(2, 500, 1_000),
            summary(3, 500, 2_000),
        ];
        rank(&mut repos);

        let ids: Vec<u64> = repos.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let mut repos = vec![
            summary(1, 500, 3_000),
            summary(2, 900, 1_000),
            summary(3, 500, 2_000),
            summary(4, 200, 4_000),
        ];
        rank(&mut repos);
        let once = repos.clone();
        rank(&mut repos);

        assert_eq!(repos, once);
    }

    #[test]
    fn test_timestamps_render_at_second_precision() {
        let repo = summary(1, 500, 0);
        let json = serde_json::to_value(&repo).unwrap();

        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_timestamps_drop_subsecond_detail() {
        let mut repo = summary(1, 500, 0);
        repo.created_at = Utc.with_ymd_and_hms(2014, 12, 24, 21, 7, 41).unwrap()
            + chrono::Duration::milliseconds(123);

        let json = serde_json::to_value(&repo).unwrap();
        assert_eq!(json["created_at"], "2014-12-24T21:07:41Z");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");

        let snapshot = Snapshot::new(vec![
            summary(1, 300, 1_600_000_000),
            summary(2, 900, 1_500_000_000),
            summary(3, 900, 1_400_000_000),
        ]);
        snapshot.write(&path).unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded.data, snapshot.data);
    }

    #[test]
    fn test_snapshot_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");

        Snapshot::new(vec![summary(1, 300, 1_600_000_000)])
            .write(&path)
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entry = &raw["data"][0];

        assert_eq!(entry["id"], 1);
        assert_eq!(entry["node_id"], "R_1");
        assert_eq!(entry["full_name"], "owner/repo-1");
        assert_eq!(entry["stargazers_count"], 300);
        assert_eq!(entry["license_spdx_id"], "MIT");
        assert_eq!(entry["archived"], false);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Snapshot::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");
        fs::write(&path, "{\"data\": 7}").unwrap();

        let err = Snapshot::load(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode(_)));
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repos.json");

        Snapshot::new(vec![summary(1, 300, 1_600_000_000)])
            .write(&path)
            .unwrap();
        Snapshot::new(vec![summary(2, 400, 1_600_000_000)])
            .write(&path)
            .unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded.data.len(), 1);
        assert_eq!(loaded.data[0].id, 2);
    }
}
