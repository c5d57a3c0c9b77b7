//! Integration tests for the SmartPill HTTP API.
//!
//! These tests drive the full router over the in-memory store:
//! 1. Medications are registered and listed
//! 2. Today's doses reflect take/snooze/miss actions
//! 3. Voice commands and the compliance calendar read the same state
//! 4. Malformed input is rejected with 400

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use smartpill::adapters::http::{api_routes, ApiDependencies};
use smartpill::adapters::{
    InMemoryDoseEventRepository, InMemoryMedicationRepository, InMemoryStoreHealth,
};
use smartpill::config::DosesConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let deps = ApiDependencies {
        medications: Arc::new(InMemoryMedicationRepository::new()),
        events: Arc::new(InMemoryDoseEventRepository::new()),
        health: Arc::new(InMemoryStoreHealth),
    };
    api_routes(deps, &DosesConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Registers a medication due every day at 08:00 UTC.
async fn create_daily_medication(app: &Router, user_id: &str) -> String {
    let (status, body) = post(
        app,
        "/api/medications",
        json!({
            "user_id": user_id,
            "name": "Aspirin",
            "dosage": "1 pill",
            "schedule": {"days_of_week": [0, 1, 2, 3, 4, 5, 6], "times": ["08:00"]}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn today(app: &Router, user_id: &str) -> Vec<Value> {
    let (status, body) = get(app, &format!("/api/today/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    body["items"].as_array().unwrap().clone()
}

// =============================================================================
// System
// =============================================================================

#[tokio::test]
async fn root_reports_running() {
    let app = app();
    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "SmartPill Backend Running");
}

#[tokio::test]
async fn health_reports_memory_store() {
    let app = app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "ok");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["connection_status"], "connected");
}

// =============================================================================
// Medications
// =============================================================================

#[tokio::test]
async fn created_medication_is_listed_for_its_user_only() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;

    let (status, body) = get(&app, "/api/medications/elder-1").await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id);
    assert_eq!(items[0]["schedule"]["times"], json!(["08:00"]));

    let (_, other) = get(&app, "/api/medications/elder-2").await;
    assert!(other["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn medication_is_fetched_by_owner_only() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;

    let (status, body) = get(&app, &format!("/api/medications/elder-1/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Aspirin");
    assert_eq!(body["dosage"], "1 pill");

    let (status, body) = get(&app, &format!("/api/medications/elder-2/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn blank_medication_name_is_rejected() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/medications",
        json!({
            "user_id": "elder-1",
            "name": "  ",
            "dosage": "1 pill",
            "schedule": {"days_of_week": [0], "times": ["08:00"]}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

// =============================================================================
// Today's doses
// =============================================================================

#[tokio::test]
async fn new_medication_shows_one_pending_dose_today() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;

    let items = today(&app, "elder-1").await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["medication_id"], id);
    assert_eq!(items[0]["status"], "pending");
    assert!(items[0]["scheduled_at"]
        .as_str()
        .unwrap()
        .ends_with("T08:00:00+00:00"));
}

#[tokio::test]
async fn snoozed_dose_reports_the_returned_deadline() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;
    let scheduled_at = today(&app, "elder-1").await[0]["scheduled_at"].clone();

    let (status, body) = post(
        &app,
        "/api/snooze",
        json!({
            "user_id": "elder-1",
            "medication_id": id,
            "scheduled_at": scheduled_at,
            "minutes": 10
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let snooze_until = body["snooze_until"].clone();

    let items = today(&app, "elder-1").await;
    assert_eq!(items[0]["status"], "snoozed");
    assert_eq!(items[0]["snooze_until"], snooze_until);
    assert!(items[0].get("taken_at").is_none());
}

#[tokio::test]
async fn taking_after_snooze_clears_the_deadline() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;
    let scheduled_at = today(&app, "elder-1").await[0]["scheduled_at"].clone();
    let action = json!({
        "user_id": "elder-1",
        "medication_id": id,
        "scheduled_at": scheduled_at
    });

    let (status, _) = post(&app, "/api/snooze", action.clone()).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = post(&app, "/api/take", action).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let items = today(&app, "elder-1").await;
    assert_eq!(items[0]["status"], "taken");
    assert!(items[0]["taken_at"].is_string());
    assert!(items[0].get("snooze_until").is_none());
}

#[tokio::test]
async fn missed_dose_is_reported() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;
    let scheduled_at = today(&app, "elder-1").await[0]["scheduled_at"].clone();

    let (status, _) = post(
        &app,
        "/api/miss",
        json!({
            "user_id": "elder-1",
            "medication_id": id,
            "scheduled_at": scheduled_at
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(today(&app, "elder-1").await[0]["status"], "missed");
}

#[tokio::test]
async fn malformed_medication_id_is_rejected() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/take",
        json!({
            "user_id": "elder-1",
            "medication_id": "not-a-uuid",
            "scheduled_at": "2024-01-15T08:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn malformed_instant_is_rejected() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;
    let (status, _) = post(
        &app,
        "/api/take",
        json!({
            "user_id": "elder-1",
            "medication_id": id,
            "scheduled_at": "tomorrow morning"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Voice
// =============================================================================

#[tokio::test]
async fn voice_names_the_due_medication() {
    let app = app();
    create_daily_medication(&app, "elder-1").await;

    let (status, body) = post(
        &app,
        "/api/voice",
        json!({"user_id": "elder-1", "text": "What medicine do I take now?"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "It's medication time. Please take 1 pill of Aspirin."
    );
}

#[tokio::test]
async fn voice_reminder_snoozes_the_due_dose() {
    let app = app();
    create_daily_medication(&app, "elder-1").await;

    let (status, body) = post(
        &app,
        "/api/voice",
        json!({"user_id": "elder-1", "text": "Remind me in 30 minutes"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Okay, I'll remind you in 30 minutes.");
    assert_eq!(today(&app, "elder-1").await[0]["status"], "snoozed");
}

#[tokio::test]
async fn voice_with_nothing_due() {
    let app = app();
    let (_, body) = post(
        &app,
        "/api/voice",
        json!({"user_id": "elder-1", "text": "what medication now"}),
    )
    .await;
    assert_eq!(body["response"], "You have no medication due right now.");

    let (_, body) = post(
        &app,
        "/api/voice",
        json!({"user_id": "elder-1", "text": "remind me in some minutes"}),
    )
    .await;
    assert_eq!(
        body["response"],
        "Okay, I'll remind you in 15 minutes, but there is nothing due right now."
    );
}

#[tokio::test]
async fn voice_does_not_understand_small_talk() {
    let app = app();
    let (status, body) = post(
        &app,
        "/api/voice",
        json!({"user_id": "elder-1", "text": "good morning"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Sorry, I didn't understand."));
}

// =============================================================================
// Caregiver compliance
// =============================================================================

#[tokio::test]
async fn compliance_covers_thirty_one_days_oldest_first() {
    let app = app();
    let (status, body) = get(&app, "/api/caregiver/compliance/elder-1").await;
    assert_eq!(status, StatusCode::OK);

    let calendar = body["calendar"].as_array().unwrap();
    assert_eq!(calendar.len(), 31);
    assert!(calendar.iter().all(|day| day["status"] == "pending"));
    let first = calendar[0]["date"].as_str().unwrap();
    let last = calendar[30]["date"].as_str().unwrap();
    assert!(first < last);
}

#[tokio::test]
async fn compliance_reflects_todays_taken_dose() {
    let app = app();
    let id = create_daily_medication(&app, "elder-1").await;
    let scheduled_at = today(&app, "elder-1").await[0]["scheduled_at"].clone();
    post(
        &app,
        "/api/take",
        json!({
            "user_id": "elder-1",
            "medication_id": id,
            "scheduled_at": scheduled_at
        }),
    )
    .await;

    let (_, body) = get(&app, "/api/caregiver/compliance/elder-1").await;
    let calendar = body["calendar"].as_array().unwrap();
    assert_eq!(calendar[30]["status"], "taken");
}
