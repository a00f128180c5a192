//! Wire types for the shortener backend API

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// `POST /api/shorten` request body
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest<'a> {
    pub url: &'a str,
}

/// Result of a successful shorten call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLinkResult {
    pub short_code: String,
    pub short_url: String,
    pub analytics_token: String,
}

/// Click statistics for one short code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub url: String,
    pub clicks: u64,
    /// Kept exactly as the backend sent it
    pub created_at: String,
}

impl AnalyticsRecord {
    /// Parse `created_at` for display.
    ///
    /// Accepts RFC 3339 and the zone-less `YYYY-MM-DDTHH:MM:SS` form, which is
    /// taken to be UTC.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// `GET /api/health` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn record(created_at: &str) -> AnalyticsRecord {
        AnalyticsRecord {
            url: "https://example.com".into(),
            clicks: 0,
            created_at: created_at.into(),
        }
    }

    #[test]
    fn test_created_at_rfc3339() {
        let dt = record("2024-01-01T00:00:00Z").created_at_utc().unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_created_at_naive_is_utc() {
        let dt = record("2024-03-05T10:20:30").created_at_utc().unwrap();
        assert_eq!((dt.month(), dt.day()), (3, 5));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (10, 20, 30));
    }

    #[test]
    fn test_created_at_garbage() {
        assert!(record("yesterday").created_at_utc().is_none());
    }

    #[test]
    fn test_negative_clicks_rejected() {
        let json = r#"{"url":"https://example.com","clicks":-1,"created_at":"x"}"#;
        assert!(serde_json::from_str::<AnalyticsRecord>(json).is_err());
    }

    #[test]
    fn test_health_message_optional() {
        let h: HealthStatus = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(h.status, "ok");
        assert!(h.message.is_none());
    }
}
