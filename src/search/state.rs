//! Observable search state

use crate::results::SearchResultItem;
use serde::Serialize;

/// Monotonic id stamped on every query change
pub type Generation = u64;

/// What the presentation layer renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SearchState {
    /// No qualifying query; nothing to show
    #[default]
    Idle,
    /// Both fetches for `query` are in flight
    Loading { query: String },
    /// Merged, ordered results for `query`
    Success {
        query: String,
        items: Vec<SearchResultItem>,
    },
    /// The search for `query` failed; the list is empty
    Error { query: String, message: String },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    /// Query this state belongs to, if any
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchState::Idle => None,
            SearchState::Loading { query }
            | SearchState::Success { query, .. }
            | SearchState::Error { query, .. } => Some(query),
        }
    }

    /// Results to display; empty unless the search succeeded
    pub fn items(&self) -> &[SearchResultItem] {
        match self {
            SearchState::Success { items, .. } => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}
