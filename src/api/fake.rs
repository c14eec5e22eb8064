//! In-memory [`GitHubApi`] used by unit tests

use super::traits::GitHubApi;
use crate::error::ApiError;
use crate::results::{ContentEntry, RepositoryResult, UserResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub(crate) struct FakeApi {
    users: HashMap<String, Vec<UserResult>>,
    repos: HashMap<String, Vec<RepositoryResult>>,
    contents: Mutex<HashMap<String, Vec<ContentEntry>>>,
    failing_user_queries: Vec<String>,
    failing_repo_queries: Vec<String>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_users(mut self, query: &str, users: Vec<UserResult>) -> Self {
        self.users.insert(query.to_string(), users);
        self
    }

    pub(crate) fn with_repos(mut self, query: &str, repos: Vec<RepositoryResult>) -> Self {
        self.repos.insert(query.to_string(), repos);
        self
    }

    /// User search for `query` answers with HTTP 503
    pub(crate) fn failing_users(mut self, query: &str) -> Self {
        self.failing_user_queries.push(query.to_string());
        self
    }

    /// Repository search for `query` answers with HTTP 500
    pub(crate) fn failing_repos(mut self, query: &str) -> Self {
        self.failing_repo_queries.push(query.to_string());
        self
    }

    /// Both searches for `query` take `delay` to answer
    pub(crate) fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    /// Contents of `path` ("" is the root) in any repository
    pub(crate) fn with_contents(self, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.set_contents(path, entries);
        self
    }

    /// Replace the contents of `path` after construction
    pub(crate) fn set_contents(&self, path: &str, entries: Vec<ContentEntry>) {
        self.contents
            .lock()
            .unwrap()
            .insert(path.to_string(), entries);
    }

    /// Make `path` answer with 404 from now on
    pub(crate) fn remove_contents(&self, path: &str) {
        self.contents.lock().unwrap().remove(path);
    }

    /// Number of remote calls made so far
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    async fn record(&self, query: &str) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl GitHubApi for FakeApi {
    async fn search_users(&self, query: &str) -> Result<Vec<UserResult>, ApiError> {
        self.record(query).await;
        if self.failing_user_queries.iter().any(|q| q == query) {
            return Err(ApiError::from_status(
                503,
                r#"{"message":"Service Unavailable"}"#,
            ));
        }
        Ok(self.users.get(query).cloned().unwrap_or_default())
    }

    async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryResult>, ApiError> {
        self.record(query).await;
        if self.failing_repo_queries.iter().any(|q| q == query) {
            return Err(ApiError::from_status(500, r#"{"message":"Server Error"}"#));
        }
        Ok(self.repos.get(query).cloned().unwrap_or_default())
    }

    async fn repository_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ContentEntry>, ApiError> {
        self.directory_contents(owner, repo, "").await
    }

    async fn directory_contents(
        &self,
        _owner: &str,
        _repo: &str,
        path: &str,
    ) -> Result<Vec<ContentEntry>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.contents
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::from_status(404, r#"{"message":"Not Found"}"#))
    }
}
