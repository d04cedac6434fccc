use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Account returned by `accounts/profile/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission || p == "*:*")
    }
}

/// One entry of `reviewers/addon/{addon}/versions/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionsListItem {
    pub id: u64,
    pub channel: String,
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionAddon {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A file tree entry inside a version
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionEntry {
    pub filename: String,
    pub path: String,
    #[serde(default)]
    pub depth: Option<u32>,
    #[serde(default)]
    pub mime_category: Option<String>,
    #[serde(default)]
    pub sha256: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionFile {
    pub id: u64,
    #[serde(default)]
    pub selected_file: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Present only on `compare_to` responses
    #[serde(default)]
    pub diff: Option<Value>,
    #[serde(default)]
    pub entries: BTreeMap<String, VersionEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single version, or a version compared against another one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Version {
    pub id: u64,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub addon: Option<VersionAddon>,
    #[serde(default)]
    pub file: Option<VersionFile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Version {
    pub fn selected_file(&self) -> Option<&str> {
        self.file.as_ref()?.selected_file.as_deref()
    }

    pub fn diff(&self) -> Option<&Value> {
        self.file.as_ref()?.diff.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "name": "Reviewer",
            "email": "r@example.test",
            "permissions": ["Addons:Review"],
            "picture_url": null
        }))
        .expect("user should decode");

        assert_eq!(user.id, 7);
        assert!(user.has_permission("Addons:Review"));
        assert!(!user.has_permission("Admin:Tools"));
        assert!(user.extra.contains_key("picture_url"));
        assert!(user.username.is_none());
    }

    #[test]
    fn test_wildcard_permission() {
        let user: User =
            serde_json::from_value(json!({"id": 1, "permissions": ["*:*"]})).expect("decode");
        assert!(user.has_permission("Anything:Goes"));
    }

    #[test]
    fn test_versions_list_decode() {
        let items: Vec<VersionsListItem> = serde_json::from_value(json!([
            {"id": 1, "channel": "listed", "version": "1.0"},
            {"id": 2, "channel": "unlisted", "version": "1.1"}
        ]))
        .expect("list should decode");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].channel, "unlisted");
    }

    #[test]
    fn test_version_with_diff() {
        let version: Version = serde_json::from_value(json!({
            "id": 3,
            "channel": "listed",
            "version": "2.0",
            "addon": {"id": 9, "slug": "addon"},
            "file": {
                "id": 11,
                "selected_file": "manifest.json",
                "diff": {"path": "manifest.json", "hunks": []},
                "entries": {
                    "manifest.json": {"filename": "manifest.json", "path": "manifest.json", "depth": 0}
                }
            }
        }))
        .expect("version should decode");

        assert_eq!(version.selected_file(), Some("manifest.json"));
        assert!(version.diff().is_some());
        assert_eq!(version.file.as_ref().map(|f| f.entries.len()), Some(1));
    }

    #[test]
    fn test_version_without_file() {
        let version: Version = serde_json::from_value(json!({"id": 4})).expect("decode");
        assert_eq!(version.selected_file(), None);
        assert_eq!(version.diff(), None);
    }
}
