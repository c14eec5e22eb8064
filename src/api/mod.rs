//! GitHub API module
//!
//! Defines the [`GitHubApi`] trait and its HTTP implementation.

mod github;
mod traits;

#[cfg(test)]
pub(crate) mod fake;

pub use github::GitHub;
pub use traits::GitHubApi;
