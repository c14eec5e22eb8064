//! Result type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account returned by `/search/users` (also embedded as repository owner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResult {
    /// Unique handle
    pub login: String,
    pub avatar_url: String,
    #[serde(rename = "html_url")]
    pub profile_url: String,
}

/// A repository returned by `/search/repositories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryResult {
    pub name: String,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "watchers_count")]
    pub watchers: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    pub owner: UserResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "html_url")]
    pub repo_url: String,
}

impl RepositoryResult {
    /// `owner/name`, the form the contents endpoint addresses
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// One row of the unified result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchResultItem {
    User(UserResult),
    Repository(RepositoryResult),
}

impl SearchResultItem {
    /// Lowercased ordering key: `login` for users, `name` for repositories
    pub fn sort_key(&self) -> String {
        match self {
            SearchResultItem::User(user) => user.login.to_lowercase(),
            SearchResultItem::Repository(repo) => repo.name.to_lowercase(),
        }
    }

    /// Text shown as the row title
    pub fn title(&self) -> &str {
        match self {
            SearchResultItem::User(user) => &user.login,
            SearchResultItem::Repository(repo) => &repo.name,
        }
    }

    /// Canonical web URL of the user or repository
    pub fn url(&self) -> &str {
        match self {
            SearchResultItem::User(user) => &user.profile_url,
            SearchResultItem::Repository(repo) => &repo.repo_url,
        }
    }

    pub fn as_repository(&self) -> Option<&RepositoryResult> {
        match self {
            SearchResultItem::Repository(repo) => Some(repo),
            SearchResultItem::User(_) => None,
        }
    }
}

impl From<UserResult> for SearchResultItem {
    fn from(user: UserResult) -> Self {
        SearchResultItem::User(user)
    }
}

impl From<RepositoryResult> for SearchResultItem {
    fn from(repo: RepositoryResult) -> Self {
        SearchResultItem::Repository(repo)
    }
}

/// Envelope of the search endpoints; total count and pagination fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse<T> {
    pub items: Vec<T>,
}

/// Kind of a repository contents entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Dir,
    File,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

impl ContentKind {
    /// Listing rank, alphabetical by wire type: dir, file, submodule, symlink, then unknown kinds
    pub fn order(self) -> u8 {
        match self {
            ContentKind::Dir => 0,
            ContentKind::File => 1,
            ContentKind::Submodule => 2,
            ContentKind::Symlink => 3,
            ContentKind::Other => 4,
        }
    }
}

/// One entry of `/repos/{owner}/{repo}/contents[/{path}]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    /// Path relative to the repository root
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    /// API URL of the entry
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub size: u64,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == ContentKind::Dir
    }
}
