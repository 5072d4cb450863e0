//! HTTP server initialization and runtime setup.
//!
//! Wires the fixture data sources, services, and log reporter into shared
//! state and runs the Axum server until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{RedirectService, ShortenService, StatsService};
use crate::config::Config;
use crate::infrastructure::{FixtureRedirectMap, FixtureStatsRepository};
use crate::reporter::{HttpCollector, Level, LogReporter, Stack};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Log reporter with the HTTP collector transport
/// - Fixture-backed statistics and redirect sources
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the bind address is
/// invalid, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let transport = HttpCollector::new(&config.collector_url)?;
    let reporter = Arc::new(LogReporter::new(Arc::new(transport)));

    let stats_repository = Arc::new(FixtureStatsRepository::new(&config.base_url));
    let redirect_map = Arc::new(FixtureRedirectMap::new());

    let state = AppState::new(
        Arc::new(ShortenService::new(&config.base_url)),
        Arc::new(StatsService::new(stats_repository)),
        Arc::new(RedirectService::new(
            redirect_map,
            Duration::from_millis(config.redirect_delay_ms),
        )),
        reporter.clone(),
        config.collector_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    // Announce startup to the collector, fire-and-forget.
    tokio::spawn(async move {
        reporter
            .send(Stack::Backend, Level::Info, "server", "Service started")
            .await;
    });

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install ctrl-c handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
