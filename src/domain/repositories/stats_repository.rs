//! Repository trait for click statistics.

use crate::domain::entities::StatRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only source of per-link click statistics.
///
/// The service exposes a fixed dataset; there is no query language, no
/// pagination, and no mutation.
///
/// # Implementations
///
/// - [`crate::infrastructure::fixtures::FixtureStatsRepository`] - static demo dataset
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Lists every statistics record in display order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing source cannot be read.
    async fn list(&self) -> Result<Vec<StatRecord>, AppError>;
}
