//! API trait shared by the live client and test doubles

use crate::error::ApiError;
use crate::results::{ContentEntry, RepositoryResult, UserResult};
use async_trait::async_trait;

/// Read-only surface of the GitHub REST API used by this crate
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /search/users?q={query}`, first page only
    async fn search_users(&self, query: &str) -> Result<Vec<UserResult>, ApiError>;

    /// `GET /search/repositories?q={query}`, first page only
    async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryResult>, ApiError>;

    /// `GET /repos/{owner}/{repo}/contents`
    async fn repository_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ContentEntry>, ApiError>;

    /// `GET /repos/{owner}/{repo}/contents/{path}`
    async fn directory_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<ContentEntry>, ApiError>;
}
