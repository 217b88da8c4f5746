//! Integration tests for the events listing API.
//!
//! Builds the real router (same modules main.rs merges) against a fixed
//! availability probe and exercises it over HTTP with `oneshot`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use windmill::AppState;
use windmill::probe::{AvailabilityProbe, FixedProbe};
use windmill::routes;

/// Build the service router around the given probe.
fn app(probe: Arc<dyn AvailabilityProbe>) -> Router {
    app_with_state(AppState::with_probe(probe, None))
}

fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::front::router())
        .merge(routes::health::router())
        .merge(routes::events::router())
        .fallback(|| async { windmill::error::AppError::NotFound })
        .with_state(state)
}

async fn get_events(app: Router) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::get("/api/v1/list/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body).unwrap();
    (status, value)
}

fn names(listing: &serde_json::Value) -> Vec<&str> {
    listing
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn all_companion_apps_present_lists_full_catalog() {
    let probe = Arc::new(FixedProbe::new(["forms", "tables", "calendar"]));
    let (status, listing) = get_events(app(probe)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&listing),
        [
            "FormSubmittedEvent",
            "NodeWrittenEvent",
            "SystemTagAssignedEvent",
            "TableRowAddedEvent",
            "CalendarObjectCreatedEvent",
            "CalendarObjectUpdatedEvent"
        ]
    );
}

#[tokio::test]
async fn no_companion_apps_lists_host_events_only() {
    let (status, listing) = get_events(app(Arc::new(FixedProbe::default()))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&listing),
        ["NodeWrittenEvent", "SystemTagAssignedEvent"]
    );
}

#[tokio::test]
async fn forms_only_adds_exactly_the_forms_event() {
    let (status, listing) = get_events(app(Arc::new(FixedProbe::new(["forms"])))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&listing),
        [
            "FormSubmittedEvent",
            "NodeWrittenEvent",
            "SystemTagAssignedEvent"
        ]
    );
}

#[tokio::test]
async fn repeated_requests_return_identical_bodies() {
    let state = AppState::with_probe(Arc::new(FixedProbe::new(["tables"])), None);

    let (_, first) = get_events(app_with_state(state.clone())).await;
    let (_, second) = get_events(app_with_state(state)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn descriptors_use_the_documented_wire_fields() {
    let (_, listing) = get_events(app(Arc::new(FixedProbe::new(["forms"])))).await;

    let form_submitted = listing
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == "FormSubmittedEvent")
        .expect("forms event missing from listing");

    assert_eq!(
        form_submitted["description"],
        "A submission to a form in Nextcloud Forms"
    );
    assert_eq!(
        form_submitted["path"],
        "OCA\\Forms\\Events\\FormSubmittedEvent"
    );
    assert_eq!(form_submitted["parameters"]["user"]["uid"], "string");
    assert_eq!(form_submitted["parameters"]["event"]["form"]["hash"], "string");
    // Gating metadata stays internal
    assert!(form_submitted.get("required_app").is_none());
}

/// Probe whose evaluation always fails.
struct BrokenProbe;

impl AvailabilityProbe for BrokenProbe {
    fn is_available(&self, _app_id: &str) -> anyhow::Result<bool> {
        anyhow::bail!("probe mechanism unavailable")
    }
}

#[tokio::test]
async fn broken_probe_still_serves_the_unconditional_subset() {
    let (status, listing) = get_events(app(Arc::new(BrokenProbe))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&listing),
        ["NodeWrittenEvent", "SystemTagAssignedEvent"]
    );
}

#[tokio::test]
async fn health_reports_ok_for_readable_apps_dir() {
    let state = AppState::with_probe(
        Arc::new(FixedProbe::default()),
        Some(std::env::temp_dir()),
    );
    let response = app_with_state(state)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_reports_unavailable_for_missing_apps_dir() {
    let state = AppState::with_probe(
        Arc::new(FixedProbe::default()),
        Some(PathBuf::from("/nonexistent/windmill-apps")),
    );
    let response = app_with_state(state)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn front_page_serves_the_ui_shell() {
    let response = app(Arc::new(FixedProbe::default()))
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(r#"<div id="integration_windmill"></div>"#));
}

#[tokio::test]
async fn unknown_paths_return_404() {
    let response = app(Arc::new(FixedProbe::default()))
        .oneshot(
            Request::get("/api/v1/list/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
