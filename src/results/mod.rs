//! Result types and container for search results
//!
//! This module defines the user/repository records and the merged, ordered list.

mod container;
mod types;

pub use container::ResultContainer;
pub use types::*;

#[cfg(test)]
pub(crate) use container::tests::{repo as sample_repo, user as sample_user};
