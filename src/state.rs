use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService, StatsService};
use crate::reporter::LogReporter;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub stats_service: Arc<StatsService>,
    pub redirect_service: Arc<RedirectService>,
    pub reporter: Arc<LogReporter>,
    /// Collector endpoint, kept for the health report.
    pub collector_url: String,
}

impl AppState {
    pub fn new(
        shorten_service: Arc<ShortenService>,
        stats_service: Arc<StatsService>,
        redirect_service: Arc<RedirectService>,
        reporter: Arc<LogReporter>,
        collector_url: String,
    ) -> Self {
        Self {
            shorten_service,
            stats_service,
            redirect_service,
            reporter,
            collector_url,
        }
    }
}
