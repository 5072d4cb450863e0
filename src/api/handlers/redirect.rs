//! Handler for short URL redirect simulation.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::domain::redirect::RedirectState;
use crate::error::AppError;
use crate::reporter::{Level, Stack};
use crate::state::AppState;

/// Simulates resolving a short code.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Wait out the configured artificial delay
/// 2. Look up the code in the static mapping
/// 3. Found: 307 Temporary Redirect to the destination
/// 4. Missing: 404 with `"Short URL not found or expired."`
///
/// A client that disconnects before the delay elapses drops the in-flight
/// lookup; no redirect is produced for abandoned requests.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.redirect_service.resolve(&code).await {
        RedirectState::Resolved { location } => {
            report(
                &state,
                Level::Info,
                format!("Redirected {} to {}", code, location),
            );
            Ok(Redirect::temporary(&location).into_response())
        }
        RedirectState::Failed { message } => {
            report(&state, Level::Warn, format!("Unknown code {}", code));
            Err(AppError::not_found(message, json!({ "code": code })))
        }
        RedirectState::Pending => Err(AppError::internal(
            "Lookup did not reach a terminal state",
            json!({ "code": code }),
        )),
    }
}

/// Forwards a redirect event to the log collector, fire-and-forget.
fn report(state: &AppState, level: Level, message: String) {
    let reporter = state.reporter.clone();
    tokio::spawn(async move {
        reporter
            .send(Stack::Backend, level, "redirect", &message)
            .await;
    });
}
