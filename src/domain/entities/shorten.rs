//! Entities for the URL shortening cycle.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Largest accepted validity window, in minutes (ten years).
///
/// Values beyond this would push the expiry outside chrono's representable
/// date range; validation rejects them before any derivation runs.
pub const MAX_VALIDITY_MINUTES: i64 = 5_256_000;

/// A single user-supplied entry in a shortening batch.
///
/// `validity` and `shortcode` are optional; an empty string means "not
/// provided". `error` is the per-input annotation slot filled during
/// validation and cleared whenever the field is edited again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenInput {
    pub url: String,
    pub validity: String,
    pub shortcode: String,
    pub error: String,
}

impl ShortenInput {
    /// Creates an input with only the URL filled in.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Parses the validity field as minutes.
    ///
    /// Returns `None` when the field is empty or does not hold a positive
    /// integer within [`MAX_VALIDITY_MINUTES`]. Validation reports the
    /// latter case as an error before any derivation runs.
    pub fn validity_minutes(&self) -> Option<i64> {
        if self.validity.is_empty() {
            return None;
        }
        self.validity
            .parse::<i64>()
            .ok()
            .filter(|v| (1..=MAX_VALIDITY_MINUTES).contains(v))
    }

    /// Returns true if validation has annotated this input.
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// A fabricated shortening result.
///
/// Derived once per submission and held only in memory; nothing is persisted
/// across restarts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShortenResult {
    pub original_url: String,
    pub short_url: String,
    pub shortcode: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
