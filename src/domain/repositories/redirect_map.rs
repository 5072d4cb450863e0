//! Repository trait for the redirect code mapping.

use async_trait::async_trait;

/// Lookup source mapping short codes to destination URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::fixtures::FixtureRedirectMap`] - static demo mapping
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectMap: Send + Sync {
    /// Returns the destination URL for `code`, or `None` when unknown.
    async fn find(&self, code: &str) -> Option<String>;
}
