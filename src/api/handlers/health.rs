//! `GET /health`.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, StorageCheck};
use crate::state::AppState;

/// Reports whether the camp store answers a count query.
///
/// Returns 200 when it does and 503 otherwise, with the same body shape:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "storage": { "status": "ok", "camps": 1 } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let storage = match state.camp_service.count_camps().await {
        Ok(count) => StorageCheck::reachable(count),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            StorageCheck::failed(format!("Storage error: {e}"))
        }
    };

    let response = HealthResponse::from_storage(storage);
    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
