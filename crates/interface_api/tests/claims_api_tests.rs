//! Integration tests for the claim-info endpoint
//!
//! Runs the full router against the mock dispatch port, covering validation,
//! permissive body parsing, verbatim passthrough, and error mapping.

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use core_kernel::PortError;
use domain_dispatch::ports::mock::MockClaimInfoPort;
use domain_dispatch::ClaimInfo;
use interface_api::{config::ApiConfig, create_router};

const CLAIM_INFO_URL: &str = "/api/v1/claims/info";
const CLAIM_ID_REQUIRED: &str = "claimId обязателен";

fn server_with(port: Arc<MockClaimInfoPort>) -> TestServer {
    let app = create_router(port, ApiConfig::default());
    TestServer::new(app).expect("test server")
}

fn succeeding_port(payload: Value) -> Arc<MockClaimInfoPort> {
    Arc::new(MockClaimInfoPort::returning(ClaimInfo::new(payload)))
}

#[tokio::test]
async fn test_missing_claim_id_returns_400() {
    let port = succeeding_port(json!({}));
    let server = server_with(port.clone());

    let response = server.post(CLAIM_INFO_URL).json(&json!({})).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({"error": CLAIM_ID_REQUIRED}));
    assert!(port.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn test_empty_claim_id_returns_400() {
    let port = succeeding_port(json!({}));
    let server = server_with(port.clone());

    let response = server.post(CLAIM_INFO_URL).json(&json!({"claimId": ""})).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({"error": CLAIM_ID_REQUIRED}));
    assert!(port.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn test_whitespace_claim_id_returns_400() {
    let port = succeeding_port(json!({}));
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": "   \t  "}))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({"error": CLAIM_ID_REQUIRED}));
    assert!(port.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn test_null_claim_id_returns_400() {
    let port = succeeding_port(json!({}));
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": null}))
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(port.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_treated_as_empty() {
    let port = succeeding_port(json!({}));
    let server = server_with(port.clone());

    let response = server.post(CLAIM_INFO_URL).text("{definitely not json").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({"error": CLAIM_ID_REQUIRED}));
    assert!(port.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn test_absent_body_is_treated_as_empty() {
    let port = succeeding_port(json!({}));
    let server = server_with(port.clone());

    let response = server.post(CLAIM_INFO_URL).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({"error": CLAIM_ID_REQUIRED}));
    assert!(port.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn test_valid_claim_id_returns_payload_verbatim() {
    let payload = json!({
        "id": "claim-9",
        "status": "delivered",
        "pricing": {"final_price": "123.45"},
    });
    let port = succeeding_port(payload.clone());
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": "claim-9"}))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), payload);
}

#[tokio::test]
async fn test_claim_id_is_trimmed_and_lookup_invoked_once() {
    let port = succeeding_port(json!({"id": "claim-9"}));
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": "  claim-9  "}))
        .await;

    assert_eq!(response.status_code(), 200);

    let calls = port.recorded_calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_str(), "claim-9");
}

#[tokio::test]
async fn test_numeric_claim_id_is_coerced_to_string() {
    let port = succeeding_port(json!({"id": "12345"}));
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": 12345}))
        .await;

    assert_eq!(response.status_code(), 200);

    let calls = port.recorded_calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].as_str(), "12345");
}

#[tokio::test]
async fn test_lookup_failure_with_message_returns_500() {
    let port = Arc::new(MockClaimInfoPort::failing_with(|| {
        PortError::upstream_with_message(409, "claim already cancelled")
    }));
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": "claim-1"}))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "claim already cancelled"})
    );
}

#[tokio::test]
async fn test_messageless_lookup_failure_returns_server_error() {
    let port = Arc::new(MockClaimInfoPort::failing_with(|| PortError::upstream(502)));
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": "claim-1"}))
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.json::<Value>(), json!({"error": "server_error"}));
}

#[tokio::test]
async fn test_transport_failure_returns_500_with_error_text() {
    let port = Arc::new(MockClaimInfoPort::failing_with(|| {
        PortError::connection("connection refused")
    }));
    let server = server_with(port.clone());

    let response = server
        .post(CLAIM_INFO_URL)
        .json(&json!({"claimId": "claim-1"}))
        .await;

    assert_eq!(response.status_code(), 500);
    let body = response.json::<Value>();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("connection refused"));
}

#[tokio::test]
async fn test_health_endpoints() {
    let port = succeeding_port(json!({}));
    let server = server_with(port);

    let health = server.get("/health").await;
    assert_eq!(health.status_code(), 200);
    assert_eq!(health.json::<Value>()["status"], json!("healthy"));

    let ready = server.get("/health/ready").await;
    assert_eq!(ready.status_code(), 200);
    assert_eq!(ready.json::<Value>()["status"], json!("ready"));
}
