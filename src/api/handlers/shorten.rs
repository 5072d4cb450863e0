//! Handler for the shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse, ShortenResultItem};
use crate::domain::entities::ShortenInput;
use crate::error::AppError;
use crate::reporter::{Level, Stack};
use crate::state::AppState;

/// Derives shortened URLs for a batch of inputs.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     { "url": "https://example.com", "validity": "30", "shortcode": "abc123" }
///   ]
/// }
/// ```
///
/// `validity` and `shortcode` are optional; empty means "not provided".
///
/// # Validation
///
/// The batch is all-or-nothing: when any input fails a field rule, nothing
/// is derived and the 400 response lists every failing input by index in
/// `error.details.items`.
///
/// # Response
///
/// ```json
/// {
///   "total": 1,
///   "items": [
///     {
///       "original_url": "https://example.com",
///       "short_url": "http://localhost:3000/abc123",
///       "shortcode": "abc123",
///       "created_at": "2024-06-28T10:00:00Z",
///       "expires_at": "2024-06-28T10:30:00Z"
///     }
///   ]
/// }
/// ```
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let inputs: Vec<ShortenInput> = payload.urls.into_iter().map(Into::into).collect();

    let results = match state.shorten_service.shorten_batch(&inputs) {
        Ok(results) => results,
        Err(err) => {
            report(&state, Level::Warn, "Batch rejected by validation".to_string());
            return Err(err);
        }
    };

    report(
        &state,
        Level::Info,
        format!("Shortened {} URLs", results.len()),
    );

    let items: Vec<ShortenResultItem> = results.into_iter().map(Into::into).collect();

    Ok(Json(ShortenResponse {
        total: items.len(),
        items,
    }))
}

/// Forwards a shortening event to the log collector, fire-and-forget.
fn report(state: &AppState, level: Level, message: String) {
    let reporter = state.reporter.clone();
    tokio::spawn(async move {
        reporter
            .send(Stack::Backend, level, "shorten", &message)
            .await;
    });
}
