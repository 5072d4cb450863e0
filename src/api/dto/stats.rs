//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::services::RowToggles;
use crate::domain::entities::StatRecord;

/// Query parameters for the statistics listing.
#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    /// Comma-separated row positions to expand, e.g. `expanded=0,2`.
    pub expanded: Option<String>,
}

impl StatsQuery {
    /// Parses the expanded list into row toggle state.
    ///
    /// Entries that are not valid positions are ignored.
    pub fn open_rows(&self) -> RowToggles {
        match &self.expanded {
            Some(raw) => RowToggles::from_indices(
                raw.split(',')
                    .filter_map(|part| part.trim().parse::<usize>().ok()),
            ),
            None => RowToggles::new(),
        }
    }
}

/// Statistics listing response.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub items: Vec<StatRow>,
}

/// One statistics row; click details appear only for expanded rows.
#[derive(Debug, Serialize)]
pub struct StatRow {
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub total_clicks: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<Vec<ClickInfo>>,
}

impl StatRow {
    pub fn from_record(record: StatRecord, expanded: bool) -> Self {
        let clicks = expanded.then(|| {
            record
                .clicks
                .into_iter()
                .map(|c| ClickInfo {
                    timestamp: c.timestamp,
                    source: c.source,
                    location: c.location,
                })
                .collect()
        });

        Self {
            original_url: record.original_url,
            short_url: record.short_url,
            created_at: record.created_at,
            expires_at: record.expires_at,
            total_clicks: record.total_clicks,
            clicks,
        }
    }
}

/// Individual click event information.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_rows_parses_comma_list() {
        let query = StatsQuery {
            expanded: Some("0, 2".to_string()),
        };
        let rows = query.open_rows();
        assert!(rows.is_open(0));
        assert!(!rows.is_open(1));
        assert!(rows.is_open(2));
    }

    #[test]
    fn test_open_rows_ignores_garbage_entries() {
        let query = StatsQuery {
            expanded: Some("1,x,-2,".to_string()),
        };
        let rows = query.open_rows();
        assert!(rows.is_open(1));
        assert_eq!(rows.open_count(), 1);
    }

    #[test]
    fn test_open_rows_defaults_to_collapsed() {
        let rows = StatsQuery::default().open_rows();
        assert_eq!(rows.open_count(), 0);
    }
}
