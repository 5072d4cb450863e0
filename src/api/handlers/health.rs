//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components degraded
///
/// # Components Checked
///
/// 1. **Stats fixture**: the dataset is readable
/// 2. **Log collector**: an endpoint is configured (delivery itself is
///    fire-and-forget and never checked here)
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let stats_check = check_stats_fixture(&state).await;
    let collector_check = check_collector(&state);

    let all_healthy = stats_check.status == "ok" && collector_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            stats_fixture: stats_check,
            log_collector: collector_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_stats_fixture(state: &AppState) -> CheckStatus {
    match state.stats_service.list_records().await {
        Ok(records) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} fixture records", records.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    }
}

fn check_collector(state: &AppState) -> CheckStatus {
    if state.collector_url.is_empty() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("No collector configured".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Collector: {}", state.collector_url)),
        }
    }
}
