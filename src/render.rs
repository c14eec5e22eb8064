//! Plain-text rendering of search state and directory listings

use ghsearch_rs::format::{bytes_to_human_readable, format_timestamp};
use ghsearch_rs::results::{ContentEntry, ContentKind};
use ghsearch_rs::{SearchResultItem, SearchState};
use std::fmt::Write;

/// Hint shown while no query is long enough to search
pub fn empty_hint(min_query_length: usize) -> String {
    format!(
        "Start typing a query (at least {} characters) to see results",
        min_query_length
    )
}

/// Render the whole search screen for a state
pub fn render_state(state: &SearchState, min_query_length: usize) -> String {
    match state {
        SearchState::Idle => empty_hint(min_query_length),
        SearchState::Loading { query } => format!("Searching for '{}'...", query),
        SearchState::Error { message, .. } => {
            format!("Nothing here yet.\n{}\nType :retry to try again.", message)
        }
        SearchState::Success { query, items } if items.is_empty() => {
            format!("No users or repositories match '{}'", query)
        }
        SearchState::Success { items, .. } => {
            let mut out = String::new();
            for (index, item) in items.iter().enumerate() {
                out.push_str(&render_item(index + 1, item));
            }
            out.trim_end().to_string()
        }
    }
}

/// One numbered result, users on a single line, repositories with details
pub fn render_item(index: usize, item: &SearchResultItem) -> String {
    let mut out = String::new();
    match item {
        SearchResultItem::User(user) => {
            let _ = writeln!(out, "{:>3}. @{}  {}", index, user.login, user.profile_url);
        }
        SearchResultItem::Repository(repo) => {
            let _ = writeln!(
                out,
                "{:>3}. {}  ★{} 👁{} ⑂{}",
                index, repo.name, repo.stars, repo.watchers, repo.forks
            );
            let _ = writeln!(out, "     by @{}  {}", repo.owner.login, repo.repo_url);
            let _ = writeln!(
                out,
                "     created {}  updated {}",
                format_timestamp(&repo.created_at),
                format_timestamp(&repo.updated_at)
            );
            if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
                let _ = writeln!(out, "     {}", description);
            }
        }
    }
    out
}

/// Directory listing, one entry per line
pub fn render_entries(title: &str, entries: &[ContentEntry]) -> String {
    let mut out = format!("Repository: {}\n", title);
    if entries.is_empty() {
        out.push_str("  (empty)");
        return out;
    }
    for entry in entries {
        let line = match entry.kind {
            ContentKind::Dir => format!("  [dir]  {}", entry.name),
            _ => format!(
                "         {}  {}",
                entry.name,
                bytes_to_human_readable(entry.size as f64)
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.trim_end().to_string()
}
