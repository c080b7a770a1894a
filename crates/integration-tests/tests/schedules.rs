//! End-to-end tests for the schedule endpoints.
//!
//! Schedules are the calendar side of the API: list order is by date
//! ascending, times are `HH:MM` form values, and there is no update
//! endpoint. Entries are replaced by a delete and a fresh create.

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use clientele_integration_tests::{TestApp, read_json};

/// Create a customer and return its id.
async fn create_customer(app: &TestApp, owner: &str, name: &str) -> String {
    let body = read_json(
        app.post(
            &format!("/api/customers?userId={owner}"),
            json!({"name": name}),
        )
        .await,
    )
    .await;
    body["id"].as_str().expect("id is a string").to_owned()
}

// =============================================================================
// Create Tests
// =============================================================================

#[tokio::test]
async fn test_create_applies_documented_defaults() {
    let app = TestApp::spawn().await;

    let response = app.post("/api/schedules?userId=agent-1", json!({})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["title"], "");
    assert_eq!(body["date"], Utc::now().date_naive().to_string());
    assert_eq!(body["startTime"], json!(null));
    assert_eq!(body["endTime"], json!(null));
    assert_eq!(body["type"], "other");
    assert_eq!(body["customerId"], json!(null));
    assert_eq!(body["customerName"], json!(null));
    assert_eq!(body["notes"], "");
    assert_eq!(body["createdBy"], "agent-1");
}

#[tokio::test]
async fn test_create_accepts_form_style_times() {
    let app = TestApp::spawn().await;

    let response = app
        .post(
            "/api/schedules?userId=agent-1",
            json!({
                "title": "Home visit",
                "date": "2024-04-02",
                "startTime": "09:30",
                "endTime": "",
                "type": "visit"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["title"], "Home visit");
    assert_eq!(body["date"], "2024-04-02");
    // Times echo back as HH:MM; the blank end time counts as unset.
    assert_eq!(body["startTime"], "09:30");
    assert_eq!(body["endTime"], json!(null));
    assert_eq!(body["type"], "visit");
}

// =============================================================================
// List & Name Resolution Tests
// =============================================================================

#[tokio::test]
async fn test_list_is_scoped_and_sorted_by_date_ascending() {
    let app = TestApp::spawn().await;

    app.post(
        "/api/schedules?userId=agent-1",
        json!({"title": "March call", "date": "2024-03-05"}),
    )
    .await;
    app.post(
        "/api/schedules?userId=agent-1",
        json!({"title": "January visit", "date": "2024-01-10"}),
    )
    .await;
    app.post(
        "/api/schedules?userId=agent-1",
        json!({"title": "February delivery", "date": "2024-02-20"}),
    )
    .await;
    app.post(
        "/api/schedules?userId=agent-2",
        json!({"title": "Other agent", "date": "2024-01-01"}),
    )
    .await;

    let body = read_json(app.get("/api/schedules?userId=agent-1").await).await;
    let titles: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|entry| entry["title"].as_str().expect("title is a string"))
        .collect();
    assert_eq!(titles, ["January visit", "February delivery", "March call"]);
}

#[tokio::test]
async fn test_list_resolves_customer_names() {
    let app = TestApp::spawn().await;
    let customer_id = create_customer(&app, "agent-1", "Mrs. Chen").await;

    app.post(
        "/api/schedules?userId=agent-1",
        json!({"title": "Visit", "customerId": customer_id}),
    )
    .await;
    app.post(
        "/api/schedules?userId=agent-1",
        json!({"title": "Dangling", "customerId": "no-such-customer"}),
    )
    .await;
    app.post("/api/schedules?userId=agent-1", json!({"title": "Unlinked"}))
        .await;

    let body = read_json(app.get("/api/schedules?userId=agent-1").await).await;
    let entries = body.as_array().expect("array body");

    let by_title = |title: &str| {
        entries
            .iter()
            .find(|entry| entry["title"] == title)
            .expect("entry present")
    };
    assert_eq!(by_title("Visit")["customerName"], "Mrs. Chen");
    assert_eq!(by_title("Dangling")["customerName"], "");
    assert_eq!(by_title("Unlinked")["customerName"], json!(null));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[tokio::test]
async fn test_delete_removes_the_entry_once() {
    let app = TestApp::spawn().await;

    let created = read_json(
        app.post("/api/schedules?userId=agent-1", json!({"title": "Visit"}))
            .await,
    )
    .await;
    let id = created["id"].as_str().expect("id is a string");

    let response = app
        .delete(&format!("/api/schedules/{id}?userId=agent-1"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, json!({"success": true}));

    let body = read_json(app.get("/api/schedules?userId=agent-1").await).await;
    assert_eq!(body, json!([]));

    // Deleting again is a miss, not a no-op.
    let response = app
        .delete(&format!("/api/schedules/{id}?userId=agent-1"))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = read_json(response).await;
    assert_eq!(
        body["error"],
        "Schedule not found or you do not have permission"
    );
}

#[tokio::test]
async fn test_delete_of_foreign_entry_is_denied() {
    let app = TestApp::spawn().await;

    let created = read_json(
        app.post("/api/schedules?userId=agent-1", json!({"title": "Visit"}))
            .await,
    )
    .await;
    let id = created["id"].as_str().expect("id is a string");

    let response = app
        .delete(&format!("/api/schedules/{id}?userId=agent-2"))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = read_json(app.get("/api/schedules?userId=agent-1").await).await;
    assert_eq!(body.as_array().expect("array body").len(), 1);
}

// =============================================================================
// Route Shape & Identity Tests
// =============================================================================

#[tokio::test]
async fn test_schedules_have_no_update_endpoint() {
    let app = TestApp::spawn().await;

    let created = read_json(
        app.post("/api/schedules?userId=agent-1", json!({"title": "Visit"}))
            .await,
    )
    .await;
    let id = created["id"].as_str().expect("id is a string");

    let response = app
        .put(
            &format!("/api/schedules/{id}?userId=agent-1"),
            json!({"title": "Edited"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_requests_without_user_id_are_rejected() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/schedules").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Missing userId parameter");

    let response = app
        .post("/api/schedules", json!({"title": "Visit"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
