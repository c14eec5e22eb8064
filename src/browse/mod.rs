//! Repository file tree browsing
//!
//! Keeps a stack of visited directory listings so a front-end can descend into
//! directories and step back out without refetching.

use crate::api::GitHubApi;
use crate::error::ApiError;
use crate::results::ContentEntry;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no entry named '{0}' in this directory")]
    NoSuchEntry(String),

    #[error("'{0}' is not a directory")]
    NotADirectory(String),
}

struct Level {
    path: String,
    entries: Vec<ContentEntry>,
}

/// Navigable view over one repository's contents
pub struct RepositoryBrowser {
    api: Arc<dyn GitHubApi>,
    owner: String,
    repo: String,
    levels: Vec<Level>,
}

impl RepositoryBrowser {
    /// Load the root of `owner/repo`
    pub async fn open(
        api: Arc<dyn GitHubApi>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Result<Self, BrowseError> {
        let owner = owner.into();
        let repo = repo.into();
        let entries = api.repository_contents(&owner, &repo).await?;

        Ok(Self {
            api,
            owner,
            repo,
            levels: vec![Level {
                path: String::new(),
                entries: order_entries(entries),
            }],
        })
    }

    /// Open `owner/repo` directly at `path`
    pub async fn open_at(
        api: Arc<dyn GitHubApi>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: &str,
    ) -> Result<Self, BrowseError> {
        let mut browser = Self::open(api, owner, repo).await?;
        let path = path.trim_matches('/');
        if !path.is_empty() {
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                browser.enter(segment).await?;
            }
        }
        Ok(browser)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Path of the current directory relative to the root, `""` at the root
    pub fn path(&self) -> &str {
        self.current().path.as_str()
    }

    /// `owner/repo` followed by the current path
    pub fn title(&self) -> String {
        if self.path().is_empty() {
            format!("{}/{}", self.owner, self.repo)
        } else {
            format!("{}/{}/{}", self.owner, self.repo, self.path())
        }
    }

    /// Entries of the current directory, ordered by kind
    pub fn entries(&self) -> &[ContentEntry] {
        &self.current().entries
    }

    /// Number of levels below the root
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Descend into the directory `name` of the current listing
    pub async fn enter(&mut self, name: &str) -> Result<(), BrowseError> {
        let entry = self
            .entries()
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| BrowseError::NoSuchEntry(name.to_string()))?;

        if !entry.is_dir() {
            return Err(BrowseError::NotADirectory(name.to_string()));
        }

        let path = if entry.path.is_empty() {
            join_path(self.path(), name)
        } else {
            entry.path.clone()
        };

        debug!("Entering {}/{}/{}", self.owner, self.repo, path);
        let entries = self
            .api
            .directory_contents(&self.owner, &self.repo, &path)
            .await?;

        self.levels.push(Level {
            path,
            entries: order_entries(entries),
        });
        Ok(())
    }

    /// Go up one level; returns false when already at the root
    pub fn back(&mut self) -> bool {
        if self.levels.len() > 1 {
            self.levels.pop();
            true
        } else {
            false
        }
    }

    /// Refetch the current directory
    pub async fn refresh(&mut self) -> Result<(), BrowseError> {
        let path = self.path().to_string();
        let entries = if path.is_empty() {
            self.api.repository_contents(&self.owner, &self.repo).await?
        } else {
            self.api
                .directory_contents(&self.owner, &self.repo, &path)
                .await?
        };

        if let Some(level) = self.levels.last_mut() {
            level.entries = order_entries(entries);
        }
        Ok(())
    }

    fn current(&self) -> &Level {
        // levels always holds at least the root
        &self.levels[self.levels.len() - 1]
    }
}

/// Grouped by kind (directories first), API order within a kind
pub fn order_entries(mut entries: Vec<ContentEntry>) -> Vec<ContentEntry> {
    entries.sort_by_key(|e| e.kind.order());
    entries
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
