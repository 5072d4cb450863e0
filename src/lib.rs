//! # MiniURL
//!
//! A self-contained demonstration URL-shortening service built with Axum.
//!
//! There is no database and no durable state: shortened links are fabricated
//! in memory, click statistics come from a fixed dataset, and redirects are
//! resolved against a static mapping after an artificial delay. Structured
//! log events are forwarded to a remote collector over HTTP.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and data-access traits
//! - **Application Layer** ([`application`]) - Business logic and form state
//! - **Infrastructure Layer** ([`infrastructure`]) - Fixture-backed data sources
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Reporter** ([`reporter`]) - Remote log event forwarding
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional; see the config module for defaults
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="http://localhost:3000"
//! export LOG_COLLECTOR_URL="http://20.244.56.144/evaluation-service/logs"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod reporter;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::form::ShortenForm;
    pub use crate::application::services::{RedirectService, ShortenService, StatsService};
    pub use crate::domain::entities::{ClickRecord, ShortenInput, ShortenResult, StatRecord};
    pub use crate::domain::redirect::RedirectState;
    pub use crate::error::AppError;
    pub use crate::reporter::{Level, LogRecord, LogReporter, ReportOutcome, Stack};
    pub use crate::state::AppState;
}
