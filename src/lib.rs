//! ghsearch-rs: unified GitHub user and repository search
//!
//! One query fans out to the user and repository search endpoints, the two
//! result sets are merged into a single case-insensitively ordered list, and a
//! [`SearchSession`] exposes loading/error state to whatever renders it.
//! Repository file trees can be browsed with [`RepositoryBrowser`].

pub mod api;
pub mod browse;
pub mod config;
pub mod error;
pub mod format;
pub mod network;
pub mod results;
pub mod search;

pub use api::{GitHub, GitHubApi};
pub use browse::RepositoryBrowser;
pub use config::Settings;
pub use error::{ApiError, SearchError};
pub use results::{RepositoryResult, SearchResultItem, UserResult};
pub use search::{Aggregator, SearchSession, SearchState};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for API requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;

/// Queries shorter than this many characters do not trigger a search
pub const MIN_QUERY_LENGTH: usize = 3;
