//! Handler for health check endpoint.

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
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 3 favorite sources" },
///     "cache": { "status": "ok", "message": "Cache reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let response = HealthResponse::from_checks(HealthChecks {
        database: check_database(&state).await,
        cache: check_cache(&state).await,
    });

    if response.is_healthy() {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks storage by counting favorite sources.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.query_service.count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {} favorite sources", count)),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

/// Checks cache connectivity.
async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::ok("Cache reachable")
    } else {
        CheckStatus::error("Cache connection failed")
    }
}
