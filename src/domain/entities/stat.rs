//! Read-only statistics entities.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single recorded click on a shortened link.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClickRecord {
    pub timestamp: DateTime<Utc>,
    /// Client description, e.g. "Chrome on Windows".
    pub source: String,
    /// Coarse geographic origin, e.g. "India".
    pub location: String,
}

/// Aggregated statistics for one shortened link.
///
/// Records are static fixture data and never mutated; click entries are kept
/// in chronological order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatRecord {
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub total_clicks: u64,
    pub clicks: Vec<ClickRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stat_record_holds_ordered_clicks() {
        let base = Utc.with_ymd_and_hms(2024, 6, 28, 10, 0, 0).unwrap();
        let record = StatRecord {
            original_url: "https://example.com".to_string(),
            short_url: "http://localhost:3000/abc123".to_string(),
            created_at: base,
            expires_at: base + chrono::Duration::minutes(30),
            total_clicks: 2,
            clicks: vec![
                ClickRecord {
                    timestamp: base + chrono::Duration::minutes(5),
                    source: "Chrome on Windows".to_string(),
                    location: "India".to_string(),
                },
                ClickRecord {
                    timestamp: base + chrono::Duration::minutes(10),
                    source: "Firefox on Linux".to_string(),
                    location: "USA".to_string(),
                },
            ],
        };

        assert_eq!(record.total_clicks, 2);
        assert!(record.clicks[0].timestamp < record.clicks[1].timestamp);
    }
}
