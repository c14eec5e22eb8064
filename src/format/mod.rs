//! Display formatting for sizes and timestamps

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Output pattern for dates, `dd.MM.yyyy HH:mm:ss`
pub const DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

const KB: f64 = (1u64 << 10) as f64;
const MB: f64 = (1u64 << 20) as f64;
const GB: f64 = (1u64 << 30) as f64;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid timestamp '{input}': {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Human-readable file size: `338.0 B`, `2 kB`, `1.5 MB`, `1.0 GB`
pub fn bytes_to_human_readable(bytes: f64) -> String {
    if bytes >= GB {
        format!("{:.1} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.0} kB", bytes / KB)
    } else {
        format!("{:.1} B", bytes)
    }
}

/// Parse an ISO-8601 timestamp with offset and render it in UTC as `dd.MM.yyyy HH:mm:ss`
pub fn format_date(input: &str) -> Result<String, FormatError> {
    let parsed = DateTime::parse_from_rfc3339(input.trim()).map_err(|source| {
        FormatError::InvalidTimestamp {
            input: input.to_string(),
            source,
        }
    })?;
    Ok(format_timestamp(&parsed.with_timezone(&Utc)))
}

/// Render an already-parsed UTC timestamp
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(bytes_to_human_readable(0.0), "0.0 B");
        assert_eq!(bytes_to_human_readable(338.0), "338.0 B");
        assert_eq!(bytes_to_human_readable(2048.0), "2 kB");
        assert_eq!(bytes_to_human_readable(1.5 * MB), "1.5 MB");
        assert_eq!(bytes_to_human_readable(599160.0), "585 kB");
        assert_eq!(bytes_to_human_readable(3.0 * GB), "3.0 GB");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2022-06-14T19:07:28Z").unwrap(),
            "14.06.2022 19:07:28"
        );
        // offsets are converted to UTC
        assert_eq!(
            format_date("2025-01-24T08:06:44+03:00").unwrap(),
            "24.01.2025 05:06:44"
        );
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        let err = format_date("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }
}
