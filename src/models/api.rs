//! Wire types for the backend API.
//!
//! Shapes mirror what the backend actually sends; fields the backend omits
//! on some routes are defaulted so one type covers every response that
//! carries it.

use serde::{Deserialize, Serialize};

// ============================================================================
// Users and repositories
// ============================================================================

/// User profile as returned inside `/get_user_info`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    pub email: String,
}

/// A listed repository.
///
/// `/get_user_info` omits `branch`, `price` and `uploader_id` on some rows,
/// while the marketplace listing includes them plus the owner profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Repository {
    pub repository_id: u64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub uploader_id: Option<u64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub owner: Option<Profile>,
}

impl Repository {
    /// Whether the listing is free to acquire.
    pub fn is_free(&self) -> bool {
        self.price.unwrap_or(0.0) == 0.0
    }
}

/// Profile plus the user's uploaded and transferred repositories.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserData {
    pub profile: Profile,
    #[serde(default)]
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub transfer_repository: Vec<Repository>,
}

/// Envelope around `/get_user_info`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserInfoResponse {
    pub user: UserData,
}

/// Entry of `/get_github_repositories`. The backend reports Spanish field
/// names on this route.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GitHubRepo {
    #[serde(rename = "nombre")]
    pub name: String,
    pub url: String,
    #[serde(rename = "visibilidad")]
    pub visibility: String,
}

/// Body of `POST /upload_repository`.
#[derive(Clone, Debug, Serialize)]
pub struct UploadRepositoryRequest {
    pub name_repository: String,
    pub url_repository: String,
}

// ============================================================================
// Repository tree and file contents
// ============================================================================

/// Kind of a tree entry, `"blob"` for files and `"tree"` for directories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "blob")]
    File,
    #[serde(rename = "tree")]
    Directory,
}

impl EntryKind {
    #[inline]
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// One flat entry of `GET /tree`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Response of `GET /tree`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RepoTreeResponse {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// Response of `GET /file`.
#[derive(Clone, Debug, Deserialize)]
pub struct FileContentResponse {
    pub content: String,
}

// ============================================================================
// Generic envelopes
// ============================================================================

/// `{ "message": ... }` success envelope (free order acquisition, confirm).
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `{ "detail": ... }` error envelope used by the backend on failures.
#[derive(Clone, Debug, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_entry_kinds() {
        let json = r#"{"tree":[{"path":"src/main.rs","type":"blob","size":120},
                               {"path":"src","type":"tree"}],
                       "truncated":false}"#;
        let parsed: RepoTreeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tree.len(), 2);
        assert_eq!(parsed.tree[0].kind, EntryKind::File);
        assert_eq!(parsed.tree[0].size, Some(120));
        assert_eq!(parsed.tree[1].kind, EntryKind::Directory);
        assert!(!parsed.truncated);
    }

    #[test]
    fn test_user_info_defaults() {
        let json = r#"{"user":{"profile":{"id":1,"username":"mona","email":"m@x.io"},
                               "repositories":[{"repository_id":7,"name":"demo",
                                                "url":"https://github.com/mona/demo"}]}}"#;
        let parsed: UserInfoResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.profile.username, "mona");
        assert_eq!(parsed.user.repositories.len(), 1);
        assert!(parsed.user.repositories[0].is_free());
        assert!(parsed.user.transfer_repository.is_empty());
    }

    #[test]
    fn test_github_repo_field_names() {
        let json = r#"[{"nombre":"tool","url":"https://github.com/x/tool","visibilidad":"public"}]"#;
        let parsed: Vec<GitHubRepo> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed[0].name, "tool");
        assert_eq!(parsed[0].visibility, "public");
    }
}
