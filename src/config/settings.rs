//! Settings structures for ghsearch-rs configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Main settings structure, loaded from `ghsearch.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (GHSEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub(crate) fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("GHSEARCH_API_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = lookup("GHSEARCH_USER_AGENT") {
            self.api.user_agent = val;
        }
        if let Some(val) = lookup("GHSEARCH_PER_PAGE") {
            if let Ok(per_page) = val.parse() {
                self.api.per_page = Some(per_page);
            }
        }
        if let Some(val) = lookup("GHSEARCH_MIN_QUERY_LENGTH") {
            if let Ok(len) = val.parse() {
                self.search.min_query_length = len;
            }
        }
        if let Some(val) = lookup("GHSEARCH_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.search.debounce_ms = ms;
            }
        }
        if let Some(val) = lookup("GHSEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.search.min_query_length == 0 {
            bail!("search.min_query_length must be at least 1");
        }
        if !(self.outgoing.request_timeout > 0.0) {
            bail!(
                "outgoing.request_timeout must be positive, got {}",
                self.outgoing.request_timeout
            );
        }
        if let Some(per_page) = self.api.per_page {
            if !(1..=100).contains(&per_page) {
                bail!("api.per_page must be between 1 and 100, got {}", per_page);
            }
        }
        if let Err(e) = Url::parse(&self.api.base_url) {
            bail!("api.base_url '{}' is invalid: {}", self.api.base_url, e);
        }
        Ok(())
    }
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the GitHub REST API
    pub base_url: String,
    /// Static User-Agent sent with every request
    pub user_agent: String,
    /// Items requested per search page (GitHub default when unset)
    pub per_page: Option<u32>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            user_agent: "GitHubSearchApp".to_string(),
            per_page: None,
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Queries shorter than this (in characters) never reach the network
    pub min_query_length: usize,
    /// Quiet period after a query change before the fetch starts
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_query_length: crate::MIN_QUERY_LENGTH,
            debounce_ms: 300,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Max idle connections kept per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 10,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "https://api.github.com");
        assert_eq!(settings.api.user_agent, "GitHubSearchApp");
        assert_eq!(settings.search.min_query_length, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "search:\n  min_query_length: 5\noutgoing:\n  request_timeout: 2.5\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(settings.search.min_query_length, 5);
        assert_eq!(settings.search.debounce_ms, 300);
        assert_eq!(settings.outgoing.request_timeout, 2.5);
        assert_eq!(settings.api.user_agent, "GitHubSearchApp");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GHSEARCH_API_URL", "http://localhost:9000"),
            ("GHSEARCH_MIN_QUERY_LENGTH", "4"),
            ("GHSEARCH_DEBOUNCE_MS", "0"),
            ("GHSEARCH_PER_PAGE", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.api.base_url, "http://localhost:9000");
        assert_eq!(settings.search.min_query_length, 4);
        assert_eq!(settings.search.debounce_ms, 0);
        assert_eq!(settings.api.per_page, None);
    }

    #[test]
    fn test_validation() {
        let mut settings = Settings::default();
        settings.search.min_query_length = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.outgoing.request_timeout = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.api.per_page = Some(101);
        assert!(settings.validate().is_err());
    }
}
