//! Per-input validation rules for shortening requests.
//!
//! Rules are checked in field order and the first failure wins, so an input
//! carries at most one error message at a time.

use crate::domain::entities::ShortenInput;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Error message for a missing or malformed URL.
pub const INVALID_URL: &str = "Enter a valid URL.";

/// Error message for a non-positive, non-numeric, or out-of-range validity.
pub const INVALID_VALIDITY: &str = "Validity must be a positive integer.";

/// Error message for a shortcode outside the allowed pattern.
pub const INVALID_SHORTCODE: &str = "Shortcode must be 3-20 alphanumeric chars.";

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,20}$").unwrap());

static VALIDITY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Returns true if `input` parses as an absolute URL.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Returns true if `code` is a well-formed shortcode.
pub fn is_valid_shortcode(code: &str) -> bool {
    SHORTCODE_REGEX.is_match(code)
}

/// Validates one shortening input.
///
/// Empty `validity` and `shortcode` fields are treated as absent and pass.
///
/// # Errors
///
/// Returns the message to annotate the input with.
pub fn validate_input(input: &ShortenInput) -> Result<(), &'static str> {
    if input.url.is_empty() || !is_valid_url(&input.url) {
        return Err(INVALID_URL);
    }

    if !input.validity.is_empty()
        && (!VALIDITY_REGEX.is_match(&input.validity) || input.validity_minutes().is_none())
    {
        return Err(INVALID_VALIDITY);
    }

    if !input.shortcode.is_empty() && !is_valid_shortcode(&input.shortcode) {
        return Err(INVALID_SHORTCODE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(url: &str, validity: &str, shortcode: &str) -> ShortenInput {
        ShortenInput {
            url: url.to_string(),
            validity: validity.to_string(),
            shortcode: shortcode.to_string(),
            error: String::new(),
        }
    }

    #[test]
    fn test_absolute_urls_accepted() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1"));
        assert!(is_valid_url("ftp://files.example.com/a.txt"));
    }

    #[test]
    fn test_malformed_urls_rejected() {
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("/relative/path"));
    }

    #[test]
    fn test_shortcode_length_boundaries() {
        assert!(is_valid_shortcode("abc"));
        assert!(is_valid_shortcode("a".repeat(20).as_str()));
        assert!(!is_valid_shortcode("ab"));
        assert!(!is_valid_shortcode("a".repeat(21).as_str()));
    }

    #[test]
    fn test_shortcode_rejects_non_alphanumerics() {
        assert!(!is_valid_shortcode("abc-12"));
        assert!(!is_valid_shortcode("abc 12"));
        assert!(!is_valid_shortcode("abc_12"));
        assert!(is_valid_shortcode("Abc123XYZ"));
    }

    #[test]
    fn test_validate_empty_url_fails() {
        assert_eq!(validate_input(&input("", "", "")), Err(INVALID_URL));
    }

    #[test]
    fn test_validate_malformed_url_fails() {
        assert_eq!(
            validate_input(&input("example.com", "", "")),
            Err(INVALID_URL)
        );
    }

    #[test]
    fn test_validate_bad_validity_fails() {
        assert_eq!(
            validate_input(&input("https://example.com", "0", "")),
            Err(INVALID_VALIDITY)
        );
        assert_eq!(
            validate_input(&input("https://example.com", "-3", "")),
            Err(INVALID_VALIDITY)
        );
        assert_eq!(
            validate_input(&input("https://example.com", "12.5", "")),
            Err(INVALID_VALIDITY)
        );
    }

    #[test]
    fn test_validate_validity_beyond_cap_fails() {
        use crate::domain::entities::MAX_VALIDITY_MINUTES;

        assert_eq!(
            validate_input(&input("https://example.com", "1000000000000", "")),
            Err(INVALID_VALIDITY)
        );
        assert!(
            validate_input(&input(
                "https://example.com",
                &MAX_VALIDITY_MINUTES.to_string(),
                ""
            ))
            .is_ok()
        );
        assert_eq!(
            validate_input(&input(
                "https://example.com",
                &(MAX_VALIDITY_MINUTES + 1).to_string(),
                ""
            )),
            Err(INVALID_VALIDITY)
        );
    }

    #[test]
    fn test_validate_bad_shortcode_fails() {
        assert_eq!(
            validate_input(&input("https://example.com", "", "x!")),
            Err(INVALID_SHORTCODE)
        );
    }

    #[test]
    fn test_validate_url_error_takes_precedence() {
        // Field order matters: a bad URL masks later field errors.
        assert_eq!(
            validate_input(&input("nope", "0", "x!")),
            Err(INVALID_URL)
        );
    }

    #[test]
    fn test_validate_full_valid_input() {
        assert!(validate_input(&input("https://example.com", "30", "abc123")).is_ok());
    }

    #[test]
    fn test_validate_optionals_absent() {
        assert!(validate_input(&input("https://example.com", "", "")).is_ok());
    }
}
