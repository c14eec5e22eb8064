//! HTTP networking module
//!
//! Provides the shared HTTP client used by the GitHub API layer.

mod client;
mod headers;

pub use client::HttpClient;
pub use headers::{accept_json, default_headers};
