use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Deepest reply depth this instance accepts, so clients can hide the
    /// reply button on responses already at the limit.
    pub max_thread_depth: i32,
}

/// GET /health -- service and database health plus the thread depth limit.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = commonground_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        max_thread_depth: state.config.max_thread_depth,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
