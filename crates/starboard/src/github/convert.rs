//! Projection from raw search items to retained summaries.

use super::types::SearchItem;
use crate::snapshot::RepoSummary;

/// Project a raw search item down to the fields the snapshot retains.
///
/// Absent owner, description, or license data collapses to empty strings,
/// matching the snapshot's wire format.
pub fn to_summary(item: &SearchItem) -> RepoSummary {
    let avatar_url = item
        .owner
        .as_ref()
        .map(|o| o.avatar_url.clone())
        .unwrap_or_default();

    let license_spdx_id = item
        .license
        .as_ref()
        .and_then(|l| l.spdx_id.clone())
        .unwrap_or_default();

    RepoSummary {
        id: item.id,
        node_id: item.node_id.clone(),
        full_name: item.full_name.clone(),
        description: item.description.clone().unwrap_or_default(),
        avatar_url,
        stargazers_count: item.stargazers_count,
        archived: item.archived,
        license_spdx_id,
        created_at: item.created_at,
        topics: item.topics.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::types::{ItemLicense, ItemOwner};
    use chrono::DateTime;

    #[test]
    fn test_full_item_projection() {
        let item = SearchItem {
            id: 11,
            node_id: "R_11".to_string(),
            full_name: "octo/widgets".to_string(),
            description: Some("widgets for everyone".to_string()),
            owner: Some(ItemOwner {
                avatar_url: "https://avatars.test/11".to_string(),
            }),
            stargazers_count: 1234,
            archived: true,
            license: Some(ItemLicense {
                spdx_id: Some("MIT".to_string()),
            }),
            created_at: DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
            topics: vec!["cli".to_string(), "tooling".to_string()],
        };

        let summary = to_summary(&item);

        assert_eq!(summary.id, 11);
        assert_eq!(summary.node_id, "R_11");
        assert_eq!(summary.full_name, "octo/widgets");
        assert_eq!(summary.description, "widgets for everyone");
        assert_eq!(summary.avatar_url, "https://avatars.test/11");
        assert_eq!(summary.stargazers_count, 1234);
        assert!(summary.archived);
        assert_eq!(summary.license_spdx_id, "MIT");
        assert_eq!(summary.created_at, item.created_at);
        assert_eq!(summary.topics, vec!["cli", "tooling"]);
    }

    #[test]
    fn test_sparse_item_collapses_to_empty_strings() {
        let item = SearchItem {
            id: 12,
            node_id: "R_12".to_string(),
            full_name: "octo/bare".to_string(),
            description: None,
            owner: None,
            stargazers_count: 250,
            archived: false,
            license: None,
            created_at: DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
            topics: Vec::new(),
        };

        let summary = to_summary(&item);

        assert_eq!(summary.description, "");
        assert_eq!(summary.avatar_url, "");
        assert_eq!(summary.license_spdx_id, "");
        assert!(summary.topics.is_empty());
    }

    #[test]
    fn test_null_spdx_inside_license_collapses_too() {
        let item = SearchItem {
            id: 13,
            node_id: "R_13".to_string(),
            full_name: "octo/unlicensed".to_string(),
            description: None,
            owner: None,
            stargazers_count: 300,
            archived: false,
            license: Some(ItemLicense { spdx_id: None }),
            created_at: DateTime::from_timestamp(1_600_000_000, 0).unwrap(),
            topics: Vec::new(),
        };

        assert_eq!(to_summary(&item).license_spdx_id, "");
    }
}
