//! Health check endpoint.
//!
//! Returns 200 OK when the configured apps directory is readable,
//! 503 Service Unavailable otherwise. The events listing itself never
//! depends on this — it degrades to the unconditional descriptors instead.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    apps_dir: bool,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let apps_dir = state.apps_dir_healthy();

    let (status, status_code) = if apps_dir {
        ("healthy", StatusCode::OK)
    } else {
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    (status_code, Json(HealthResponse { status, apps_dir }))
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
