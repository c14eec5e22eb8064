//! Default request headers

use crate::config::{ApiSettings, OutgoingSettings};
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};

/// Media type recommended by the GitHub REST API
pub fn accept_json() -> &'static str {
    "application/vnd.github+json"
}

/// Headers attached to every request: the static User-Agent, Accept, and any configured extras
pub fn default_headers(api: &ApiSettings, outgoing: &OutgoingSettings) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&api.user_agent)
            .with_context(|| format!("Invalid User-Agent value: {}", api.user_agent))?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static(accept_json()));

    for (key, value) in &outgoing.extra_headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .with_context(|| format!("Invalid header name: {}", key))?;
        let value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid value for header {}", key))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
