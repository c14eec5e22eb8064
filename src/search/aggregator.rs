//! Unified search: users and repositories fetched together and merged into one list

use crate::api::GitHubApi;
use crate::error::SearchError;
use crate::results::{ResultContainer, SearchResultItem};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs both searches for a query and merges them into one ordered list
#[derive(Clone)]
pub struct Aggregator {
    api: Arc<dyn GitHubApi>,
    min_query_length: usize,
}

impl Aggregator {
    /// Create a new aggregator over an API implementation
    pub fn new(api: Arc<dyn GitHubApi>) -> Self {
        Self {
            api,
            min_query_length: crate::MIN_QUERY_LENGTH,
        }
    }

    /// Set the minimum query length (in characters) that triggers a fetch
    pub fn with_min_query_length(mut self, len: usize) -> Self {
        self.min_query_length = len.max(1);
        self
    }

    pub fn min_query_length(&self) -> usize {
        self.min_query_length
    }

    /// Whether `query` is long enough to hit the network
    pub fn qualifies(&self, query: &str) -> bool {
        query.chars().count() >= self.min_query_length
    }

    /// Search users and repositories for `query`.
    ///
    /// Short queries return an empty list without any request. Both fetches must
    /// succeed; the first failure fails the whole search and no partial list is
    /// returned.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        if !self.qualifies(query) {
            debug!(
                "Query '{}' is shorter than {} characters, skipping fetch",
                query, self.min_query_length
            );
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let fetched = futures::try_join!(
            self.api.search_users(query),
            self.api.search_repositories(query)
        );

        let (users, repositories) = match fetched {
            Ok(parts) => parts,
            Err(e) => {
                warn!("Search '{}' failed: {}", query, e);
                return Err(SearchError::from(e));
            }
        };

        let container = ResultContainer::from_parts(users, repositories);
        info!(
            "Search '{}' returned {} results in {:?}",
            query,
            container.len(),
            start.elapsed()
        );

        Ok(container.into_ordered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::results::{sample_repo, sample_user};

    fn aggregator(api: FakeApi) -> (Aggregator, Arc<FakeApi>) {
        let api = Arc::new(api);
        (Aggregator::new(api.clone()), api)
    }

    #[tokio::test]
    async fn test_short_query_skips_network() {
        let (agg, api) = aggregator(FakeApi::new().with_users("ab", vec![sample_user("abby")]));

        for query in ["", "a", "ab"] {
            let results = agg.search(query).await.unwrap();
            assert!(results.is_empty());
        }
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_threshold_counts_characters() {
        let (agg, api) = aggregator(FakeApi::new());

        // two characters, four bytes
        tokio_test::assert_ok!(agg.search("жж").await);
        assert_eq!(api.calls(), 0);

        tokio_test::assert_ok!(agg.search("жжж").await);
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn test_merge_and_sort() {
        let (agg, _) = aggregator(
            FakeApi::new()
                .with_users("eta", vec![sample_user("Beta")])
                .with_repos("eta", vec![sample_repo("Zeta"), sample_repo("alpha")]),
        );

        let results = agg.search("eta").await.unwrap();
        let titles: Vec<&str> = results.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["alpha", "Beta", "Zeta"]);
    }

    #[tokio::test]
    async fn test_length_is_users_plus_repos() {
        let (agg, _) = aggregator(
            FakeApi::new()
                .with_users("rust", vec![sample_user("a"), sample_user("b")])
                .with_repos("rust", vec![sample_repo("c"), sample_repo("d"), sample_repo("e")]),
        );

        assert_eq!(agg.search("rust").await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_any_failure_fails_whole_search() {
        let (agg, _) = aggregator(
            FakeApi::new()
                .with_users("rust", vec![sample_user("ferris")])
                .failing_repos("rust"),
        );

        let err = agg.search("rust").await.unwrap_err();
        assert!(err.user_message().contains("Server Error"));
    }

    #[tokio::test]
    async fn test_user_search_failure_fails_whole_search() {
        let (agg, api) = aggregator(
            FakeApi::new()
                .failing_users("rust")
                .with_repos("rust", vec![sample_repo("rust"), sample_repo("cargo")]),
        );

        let err = agg.search("rust").await.unwrap_err();
        assert!(matches!(
            err,
            SearchError::Fetch(crate::error::ApiError::Http { status: 503, .. })
        ));
        assert!(err.user_message().contains("Service Unavailable"));
        assert!(api.calls() >= 1);
    }

    #[tokio::test]
    async fn test_over_http_one_endpoint_failing() {
        use crate::api::GitHub;
        use crate::network::HttpClient;
        use wiremock::matchers::path;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(path("/search/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"items": [{"login": "ferris", "avatar_url": "a", "html_url": "h"}]}"#,
            ))
            .mount(&server)
            .await;
        Mock::given(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items": [{"name": 1}]}"#))
            .mount(&server)
            .await;

        let github = GitHub::new(HttpClient::new().unwrap(), &server.uri()).unwrap();
        let agg = Aggregator::new(Arc::new(github));

        let err = agg.search("ferris").await.unwrap_err();
        assert!(matches!(err, SearchError::Fetch(crate::error::ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_custom_threshold() {
        let (agg, api) = aggregator(FakeApi::new());
        let agg = agg.with_min_query_length(5);

        assert!(!agg.qualifies("rust"));
        agg.search("rust").await.unwrap();
        assert_eq!(api.calls(), 0);
    }
}
