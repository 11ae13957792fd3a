//! Integration tests for the admin API.
//!
//! These tests require:
//! - A running admin server (cargo run -p r4c-admin)
//! - SMTP credentials in the server's environment for the fulfillment path
//!
//! Run with: cargo test -p r4c-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the admin API (configurable via environment).
fn base_url() -> String {
    std::env::var("R4C_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn client() -> Client {
    Client::new()
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_health() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_readiness() {
    let resp = client()
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Robot Intake Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_robot_create() {
    let resp = client()
        .post(format!("{}/robots/create/", base_url()))
        .json(&json!({
            "model": "AB",
            "version": "01",
            "created": "2024-12-16T10:00:00",
        }))
        .send()
        .await
        .expect("Failed to create robot");

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Robot created" }));
}

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_robot_create_future_date_rejected() {
    let resp = client()
        .post(format!("{}/robots/create/", base_url()))
        .json(&json!({
            "model": "AB",
            "version": "01",
            "created": "2099-12-16T10:00:00",
        }))
        .send()
        .await
        .expect("Failed to post robot");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "Date cannot be in the future." }));
}

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_robot_create_malformed_json() {
    let resp = client()
        .post(format!("{}/robots/create/", base_url()))
        .header("content-type", "application/json")
        .body(r#"{ "model": "AB", "#)
        .send()
        .await
        .expect("Failed to post robot");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "Invalid JSON" }));
}

// ============================================================================
// Order Intake Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_order_create() {
    let resp = client()
        .post(format!("{}/orders/create_order/", base_url()))
        .json(&json!({
            "customer_email": "integration-test@example.com",
            "robot_serial": "ZZ-99",
        }))
        .send()
        .await
        .expect("Failed to create order");

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Order created successfully." }));
}

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_order_create_missing_fields() {
    let resp = client()
        .post(format!("{}/orders/create_order/", base_url()))
        .json(&json!({ "customer_email": "integration-test@example.com" }))
        .send()
        .await
        .expect("Failed to post order");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "error": "Both email and serial are required." })
    );
}

// ============================================================================
// Export Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_export_to_excel() {
    let resp = client()
        .get(format!("{}/robots/export_to_excel/", base_url()))
        .send()
        .await
        .expect("Failed to request export");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .expect("content type header"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let bytes = resp.bytes().await.expect("Failed to read body");
    // .xlsx files are zip archives.
    assert_eq!(bytes.first(), Some(&b'P'));
    assert_eq!(bytes.get(1), Some(&b'K'));
}
