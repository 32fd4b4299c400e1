//! Health check handlers

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Liveness check
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness check - verifies the database connection
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.service_context().pool())
        .await
        .map_err(ApiError::internal)?;

    Ok(Json(json!({ "status": "ready" })))
}
