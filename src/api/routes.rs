//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Derive shortened URLs for a batch (1-5 inputs)
/// - `GET  /stats`   - Fixed click statistics (`?expanded=` opens rows)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_handler))
}
