//! DTOs for the shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ShortenInput, ShortenResult};

/// Request to shorten a batch of URLs.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 5, message = "Batch must contain 1 to 5 URLs"))]
    pub urls: Vec<UrlItem>,
}

/// Individual URL entry in the batch.
///
/// `validity` and `shortcode` default to empty strings, which means
/// "not provided"; field-level rules are applied by the service so that a
/// rejected batch reports every failing input by index. The length rule on
/// [`ShortenRequest::urls`] embeds the offending value in its error params,
/// so entries must serialize.
#[derive(Debug, Serialize, Deserialize)]
pub struct UrlItem {
    pub url: String,

    /// Validity window in minutes as a positive integer string.
    #[serde(default)]
    pub validity: String,

    /// Preferred shortcode, 3-20 alphanumeric characters.
    #[serde(default)]
    pub shortcode: String,
}

impl From<UrlItem> for ShortenInput {
    fn from(item: UrlItem) -> Self {
        ShortenInput {
            url: item.url,
            validity: item.validity,
            shortcode: item.shortcode,
            error: String::new(),
        }
    }
}

/// Response with one derived result per input.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub total: usize,
    pub items: Vec<ShortenResultItem>,
}

/// Derived shortening result for a single input.
#[derive(Debug, Serialize)]
pub struct ShortenResultItem {
    pub original_url: String,
    pub short_url: String,
    pub shortcode: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<ShortenResult> for ShortenResultItem {
    fn from(result: ShortenResult) -> Self {
        Self {
            original_url: result.original_url,
            short_url: result.short_url,
            shortcode: result.shortcode,
            created_at: result.created_at,
            expires_at: result.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str) -> UrlItem {
        UrlItem {
            url: url.to_string(),
            validity: String::new(),
            shortcode: String::new(),
        }
    }

    #[test]
    fn test_batch_size_rule_accepts_one_to_five() {
        for n in 1..=5 {
            let request = ShortenRequest {
                urls: (0..n).map(|i| item(&format!("https://example.com/{i}"))).collect(),
            };
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn test_batch_size_rule_rejects_empty_and_oversized() {
        let request = ShortenRequest { urls: vec![] };
        assert!(request.validate().is_err());

        let request = ShortenRequest {
            urls: (0..6).map(|i| item(&format!("https://example.com/{i}"))).collect(),
        };
        assert!(request.validate().is_err());
    }
}
