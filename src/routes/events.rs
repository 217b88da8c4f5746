//! Event listing endpoint.
//!
//! `GET /api/v1/list/events` returns every event available for webhook
//! registration in this deployment. Read-only, parameterless, always 200:
//! when no companion app is installed the body is just shorter, and a
//! broken probe shrinks the list rather than failing the request.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::catalog::EventDescriptor;
use crate::state::AppState;

/// Create the events API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/list/events", get(list_events))
}

/// List all events that can be registered as a webhook.
async fn list_events(State(state): State<AppState>) -> Json<Vec<&'static EventDescriptor>> {
    Json(state.catalog().list())
}
