//! Handler for the statistics listing.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::stats::{StatRow, StatsQuery, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the fixed statistics dataset.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Query Parameters
///
/// - `expanded` (optional): comma-separated row positions whose click
///   details should be included, e.g. `?expanded=0,2`. Collapsed rows carry
///   only summary fields.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the fixture source cannot be read.
pub async fn stats_handler(
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let open = params.open_rows();

    let records = state.stats_service.list_records().await?;

    let items: Vec<StatRow> = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| StatRow::from_record(record, open.is_open(idx)))
        .collect();

    Ok(Json(StatsResponse {
        total: items.len(),
        items,
    }))
}
