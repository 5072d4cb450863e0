//! Data access trait definitions.
//!
//! Implemented by the fixture-backed sources in [`crate::infrastructure`];
//! mocks are generated with `mockall` under `cfg(test)`.

pub mod redirect_map;
pub mod stats_repository;

pub use redirect_map::RedirectMap;
pub use stats_repository::StatsRepository;

#[cfg(test)]
pub use redirect_map::MockRedirectMap;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
