//! GitHub REST API client
//!
//! Talks to the search and contents endpoints through the shared [`HttpClient`].

use super::traits::GitHubApi;
use crate::config::Settings;
use crate::error::ApiError;
use crate::network::HttpClient;
use crate::results::{ContentEntry, RepositoryResult, SearchResponse, UserResult};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Live GitHub API
#[derive(Clone)]
pub struct GitHub {
    client: HttpClient,
    base_url: Url,
    per_page: Option<u32>,
}

/// The contents endpoint answers with an object instead of a list when the path is a file
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Listing(Vec<ContentEntry>),
    Single(ContentEntry),
}

impl GitHub {
    pub fn new(client: HttpClient, base_url: &str) -> Result<Self, ApiError> {
        // a trailing slash keeps Url::join from dropping the last path segment
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
            per_page: None,
        })
    }

    /// Build from settings, reusing an already-constructed client
    pub fn with_settings(client: HttpClient, settings: &Settings) -> Result<Self, ApiError> {
        Ok(Self::new(client, &settings.api.base_url)?.with_per_page(settings.api.per_page))
    }

    pub fn with_per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn search_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.to_string())];
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }

    async fn search<T>(&self, endpoint: &str, query: &str) -> Result<Vec<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(endpoint)?;
        let response: SearchResponse<T> = self
            .client
            .get_json(url.as_str(), &self.search_params(query))
            .await?;

        debug!("{} returned {} items for '{}'", endpoint, response.items.len(), query);
        Ok(response.items)
    }

    async fn contents(&self, relative: String) -> Result<Vec<ContentEntry>, ApiError> {
        let url = self.endpoint(&relative)?;
        let response: ContentsResponse = self.client.get_json(url.as_str(), &[]).await?;

        Ok(match response {
            ContentsResponse::Listing(entries) => entries,
            ContentsResponse::Single(entry) => vec![entry],
        })
    }
}

/// Percent-encode each segment of a repository path, keeping the separators
fn encode_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[async_trait]
impl GitHubApi for GitHub {
    async fn search_users(&self, query: &str) -> Result<Vec<UserResult>, ApiError> {
        self.search("search/users", query).await
    }

    async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryResult>, ApiError> {
        self.search("search/repositories", query).await
    }

    async fn repository_contents(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<ContentEntry>, ApiError> {
        self.contents(format!(
            "repos/{}/{}/contents",
            urlencoding::encode(owner),
            urlencoding::encode(repo)
        ))
        .await
    }

    async fn directory_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Vec<ContentEntry>, ApiError> {
        let path = encode_path(path);
        if path.is_empty() {
            return self.repository_contents(owner, repo).await;
        }

        self.contents(format!(
            "repos/{}/{}/contents/{}",
            urlencoding::encode(owner),
            urlencoding::encode(repo),
            path
        ))
        .await
    }
}
