//! Infrastructure layer: fixture-backed data sources.
//!
//! The demo service has no database; the repository traits from
//! [`crate::domain::repositories`] are implemented over hard-coded data.

pub mod fixtures;

pub use fixtures::{FixtureRedirectMap, FixtureStatsRepository};
