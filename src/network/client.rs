//! HTTP client for making requests to the GitHub API

use super::headers::default_headers;
use crate::config::Settings;
use crate::error::ApiError;
use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::debug;

/// HTTP client wrapper, built once at startup and shared by clone
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&Settings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &Settings) -> Result<Self> {
        let outgoing = &settings.outgoing;
        let mut builder = Client::builder()
            .default_headers(default_headers(&settings.api, outgoing)?)
            .timeout(Duration::from_secs_f64(outgoing.request_timeout))
            .pool_max_idle_per_host(outgoing.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !outgoing.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = outgoing.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = outgoing.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = outgoing.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: settings.api.user_agent.clone(),
        })
    }

    /// GET a URL with query parameters and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let start = Instant::now();

        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(
            "GET {} -> {} in {:?}",
            response.url(),
            status.as_u16(),
            start.elapsed()
        );

        let remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::from_response(
                status.as_u16(),
                remaining.as_deref(),
                &text,
            ));
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
