//! Result container for merging user and repository matches into one ordered list

use super::types::*;

/// Heterogeneous result list in fetch order, sorted on demand
#[derive(Debug, Clone, Default)]
pub struct ResultContainer {
    items: Vec<SearchResultItem>,
}

impl ResultContainer {
    /// Create a new empty result container
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the two fetches, users first
    pub fn from_parts(users: Vec<UserResult>, repositories: Vec<RepositoryResult>) -> Self {
        let mut container = Self::new();
        container.extend_users(users);
        container.extend_repositories(repositories);
        container
    }

    pub fn extend_users(&mut self, users: Vec<UserResult>) {
        self.items.extend(users.into_iter().map(SearchResultItem::User));
    }

    pub fn extend_repositories(&mut self, repositories: Vec<RepositoryResult>) {
        self.items
            .extend(repositories.into_iter().map(SearchResultItem::Repository));
    }

    /// Consume the container and return items ordered by their lowercase key.
    ///
    /// The sort is stable, so equal keys keep fetch order.
    pub fn into_ordered(self) -> Vec<SearchResultItem> {
        let mut items = self.items;
        items.sort_by_cached_key(|item| item.sort_key());
        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
