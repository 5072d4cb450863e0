//! Hard-coded demo data standing in for a real backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{ClickRecord, StatRecord};
use crate::domain::repositories::{RedirectMap, StatsRepository};
use crate::error::AppError;

/// Static statistics dataset.
///
/// One record with three recorded clicks, mirroring the demo fixture the
/// statistics page was designed around.
pub struct FixtureStatsRepository {
    records: Vec<StatRecord>,
}

impl FixtureStatsRepository {
    /// Builds the dataset; short URLs are derived from `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            records: demo_records(base_url),
        }
    }
}

#[async_trait]
impl StatsRepository for FixtureStatsRepository {
    async fn list(&self) -> Result<Vec<StatRecord>, AppError> {
        Ok(self.records.clone())
    }
}

fn demo_records(base_url: &str) -> Vec<StatRecord> {
    let base = base_url.trim_end_matches('/');
    let created = ts(2024, 6, 28, 10, 0);

    vec![StatRecord {
        original_url: "https://example.com".to_string(),
        short_url: format!("{base}/abc123"),
        created_at: created,
        expires_at: ts(2024, 6, 28, 10, 30),
        total_clicks: 3,
        clicks: vec![
            click(ts(2024, 6, 28, 10, 5), "Chrome on Windows", "India"),
            click(ts(2024, 6, 28, 10, 10), "Firefox on Linux", "USA"),
            click(ts(2024, 6, 28, 10, 15), "Safari on iOS", "UK"),
        ],
    }]
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn click(timestamp: DateTime<Utc>, source: &str, location: &str) -> ClickRecord {
    ClickRecord {
        timestamp,
        source: source.to_string(),
        location: location.to_string(),
    }
}

/// Static code-to-destination mapping for redirect simulation.
pub struct FixtureRedirectMap {
    entries: HashMap<String, String>,
}

impl FixtureRedirectMap {
    /// Builds the demo mapping.
    pub fn new() -> Self {
        Self::with_entries([
            ("abc123", "https://example.com"),
            ("rust101", "https://www.rust-lang.org"),
        ])
    }

    /// Builds a mapping from explicit entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, url)| (code.to_string(), url.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FixtureRedirectMap {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RedirectMap for FixtureRedirectMap {
    async fn find(&self, code: &str) -> Option<String> {
        self.entries.get(code).cloned()
    }
}
