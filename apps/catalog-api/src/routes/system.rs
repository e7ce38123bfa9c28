//! Liveness and health probes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

pub async fn root() -> &'static str {
    "Forestal catalog API is running"
}

/// 200 when the store answers `SELECT 1` within the query timeout.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    if state.db.health_check().await {
        Ok(Json(json!({ "status": "ok" })))
    } else {
        Err(ApiError::new(
            ErrorCode::StoreUnavailable,
            "Database is not responding",
        ))
    }
}
