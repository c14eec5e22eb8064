//! Error types shared by the API client and the search aggregator

use thiserror::Error;

/// Failure talking to the remote API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, TLS, broken body)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request did not finish within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The API rejected the request because of rate limiting
    #[error("rate limit exceeded (HTTP {status})")]
    RateLimited { status: u16 },

    /// Any other non-2xx response
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not the JSON shape we expected
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(e)
        }
    }
}

impl ApiError {
    /// Build an error from a non-2xx status and its body
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::from_response(status, None, body)
    }

    /// Build an error from a non-2xx response.
    ///
    /// A 429 is always rate limiting. A 403 only counts as rate limiting when
    /// `x-ratelimit-remaining` is `0` or the message says so; any other 403 is
    /// a plain HTTP error (missing permission, blocked resource).
    pub fn from_response(status: u16, rate_limit_remaining: Option<&str>, body: &str) -> Self {
        let message = extract_message(body);
        let exhausted = rate_limit_remaining.map(str::trim) == Some("0");

        match status {
            429 => ApiError::RateLimited { status },
            403 if exhausted || message.to_lowercase().contains("rate limit") => {
                ApiError::RateLimited { status }
            }
            _ => ApiError::Http { status, message },
        }
    }

    /// HTTP status, when the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RateLimited { status } | ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().chars().take(200).collect())
}

/// Failure of an aggregated search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search failed: {0}")]
    Fetch(#[from] ApiError),
}

impl SearchError {
    /// Single message suitable for showing to a user next to a retry action
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Fetch(ApiError::Timeout) | SearchError::Fetch(ApiError::Network(_)) => {
                "Could not reach GitHub. Check your connection and try again.".to_string()
            }
            SearchError::Fetch(ApiError::RateLimited { .. }) => {
                "GitHub is rate limiting requests. Wait a moment and try again.".to_string()
            }
            SearchError::Fetch(e) => format!("Something went wrong: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            ApiError::from_status(403, r#"{"message":"API rate limit exceeded for 1.2.3.4."}"#),
            ApiError::RateLimited { status: 403 }
        ));
        assert!(matches!(
            ApiError::from_status(429, ""),
            ApiError::RateLimited { status: 429 }
        ));

        let err = ApiError::from_status(422, r#"{"message":"Validation Failed"}"#);
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "HTTP error 422: Validation Failed");
    }

    #[test]
    fn test_forbidden_is_not_always_rate_limiting() {
        let denied = r#"{"message":"Resource not accessible by integration"}"#;

        let err = ApiError::from_response(403, None, denied);
        assert!(matches!(err, ApiError::Http { status: 403, .. }));
        assert_eq!(err.to_string(), "HTTP error 403: Resource not accessible by integration");

        let err = ApiError::from_response(403, Some("57"), denied);
        assert!(matches!(err, ApiError::Http { status: 403, .. }));

        let err = ApiError::from_response(403, Some("0"), denied);
        assert!(matches!(err, ApiError::RateLimited { status: 403 }));

        let err = SearchError::from(ApiError::from_response(403, None, denied));
        assert!(err.user_message().starts_with("Something went wrong"));
    }

    #[test]
    fn test_secondary_rate_limit_message() {
        let body = r#"{"message":"You have exceeded a secondary rate limit."}"#;
        assert!(matches!(
            ApiError::from_response(403, Some("12"), body),
            ApiError::RateLimited { status: 403 }
        ));
    }

    #[test]
    fn test_plain_body_message() {
        let err = ApiError::from_status(502, "  Bad gateway\n");
        assert_eq!(err.to_string(), "HTTP error 502: Bad gateway");
    }

    #[test]
    fn test_user_message_flattening() {
        let err = SearchError::from(ApiError::Timeout);
        assert!(err.user_message().contains("Could not reach GitHub"));

        let err = SearchError::from(ApiError::RateLimited { status: 403 });
        assert!(err.user_message().contains("rate limiting"));

        let err = SearchError::from(ApiError::from_status(500, "boom"));
        assert_eq!(err.user_message(), "Something went wrong: HTTP error 500: boom");
    }
}
