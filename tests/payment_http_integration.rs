//! Integration tests for the payment HTTP surface and its effect on level
//! access.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use mindful_path::adapters::access::PaymentAccessChecker;
use mindful_path::adapters::auth::MockSessionValidator;
use mindful_path::adapters::http::{api_router, AssessmentAppState, PaymentAppState};
use mindful_path::adapters::memory::{InMemoryAssessmentStore, InMemoryPaymentStore};
use mindful_path::adapters::paypal::MockPaymentGateway;
use mindful_path::domain::assessment::QuestionBank;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_gateway(gateway: MockPaymentGateway) -> Router {
    let assessments = Arc::new(InMemoryAssessmentStore::new());
    let payments = Arc::new(InMemoryPaymentStore::new());

    let assessment_state = AssessmentAppState {
        access_checker: Arc::new(PaymentAccessChecker::new(payments.clone())),
        assessment_repository: assessments.clone(),
        assessment_reader: assessments,
        question_bank: QuestionBank::standard().unwrap(),
    };
    let payment_state = PaymentAppState {
        gateway: Arc::new(gateway),
        payment_repository: payments.clone(),
        payment_reader: payments,
        frontend_url: "https://app.example.com/".to_string(),
    };
    let validator = MockSessionValidator::new()
        .with_test_user("alice", "alice")
        .with_test_user("bob", "bob");

    api_router(assessment_state, payment_state, Arc::new(validator))
}

fn app() -> Router {
    app_with_gateway(MockPaymentGateway::new())
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_order(
    app: &Router,
    token: &str,
    level: u32,
    currency: &str,
) -> (StatusCode, Value) {
    call(
        app,
        Method::POST,
        "/api/v1/payments/create-order",
        token,
        Some(json!({ "level": level, "currency": currency })),
    )
    .await
}

async fn execute(app: &Router, token: &str, payment_id: &Value) -> (StatusCode, Value) {
    call(
        app,
        Method::POST,
        "/api/v1/payments/execute-payment",
        token,
        Some(json!({ "paymentId": payment_id, "PayerID": "PAYER-9" })),
    )
    .await
}

// =============================================================================
// Order creation
// =============================================================================

#[tokio::test]
async fn create_order_returns_approval_url_and_pending_record() {
    let app = app();
    let (status, order) = create_order(&app, "alice", 2, "GBP").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["status"], "order_created");
    assert!(order["approval_url"].as_str().unwrap().contains("token="));

    let (_, history) = call(&app, Method::GET, "/api/v1/payments/history", "alice", None).await;
    let records = history.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "pending");
    assert_eq!(records[0]["amount"], "5");
    assert_eq!(records[0]["currency"], "GBP");
    assert_eq!(records[0]["service_type"], "level_2");
    assert_eq!(records[0]["transaction_id"], order["payment_id"]);
}

#[tokio::test]
async fn unknown_service_or_currency_is_invalid_pricing() {
    let app = app();

    let (status, body) = create_order(&app, "alice", 1, "USD").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "INVALID_PRICING");

    let (status, _) = create_order(&app, "alice", 2, "EUR").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn second_purchase_of_same_level_is_refused() {
    let app = app();
    let (_, order) = create_order(&app, "alice", 3, "INR").await;
    let (status, _) = execute(&app, "alice", &order["payment_id"]).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = create_order(&app, "alice", 3, "INR").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "ALREADY_PURCHASED");
}

#[tokio::test]
async fn unavailable_gateway_is_bad_gateway() {
    let app = app_with_gateway(MockPaymentGateway::unavailable("connection refused"));
    let (status, body) = create_order(&app, "alice", 2, "USD").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error_code"], "GATEWAY_ERROR");
}

// =============================================================================
// Execution
// =============================================================================

#[tokio::test]
async fn executed_payment_unlocks_level() {
    let app = app();
    let (status, _) = call(&app, Method::GET, "/api/v1/assessment/questions/2", "alice", None).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);

    let (_, order) = create_order(&app, "alice", 2, "USD").await;
    let (status, body) = execute(&app, "alice", &order["payment_id"]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "payment_verified");
    assert_eq!(body["level"], 2);
    assert_eq!(body["transaction_id"], order["payment_id"]);

    let (status, _) = call(&app, Method::GET, "/api/v1/assessment/questions/2", "alice", None).await;
    assert_eq!(status, StatusCode::OK);

    // Unlocking is per user.
    let (status, _) = call(&app, Method::GET, "/api/v1/assessment/questions/2", "bob", None).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn declined_payment_is_recorded_as_failed() {
    let app = app_with_gateway(MockPaymentGateway::declining("INSTRUMENT_DECLINED"));
    let (_, order) = create_order(&app, "alice", 2, "USD").await;

    let (status, body) = execute(&app, "alice", &order["payment_id"]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "PAYMENT_FAILED");

    let (_, history) = call(&app, Method::GET, "/api/v1/payments/history", "alice", None).await;
    assert_eq!(history[0]["status"], "failed");
    assert_eq!(history[0]["failure_reason"], "INSTRUMENT_DECLINED");

    let (status, _) = call(&app, Method::GET, "/api/v1/assessment/questions/2", "alice", None).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn executing_someone_elses_order_is_not_found() {
    let app = app();
    let (_, order) = create_order(&app, "alice", 2, "USD").await;

    let (status, body) = execute(&app, "bob", &order["payment_id"]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "PAYMENT_NOT_FOUND");
}

#[tokio::test]
async fn executing_twice_is_not_found() {
    let app = app();
    let (_, order) = create_order(&app, "alice", 2, "USD").await;
    execute(&app, "alice", &order["payment_id"]).await;

    let (status, _) = execute(&app, "alice", &order["payment_id"]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Status lookup
// =============================================================================

#[tokio::test]
async fn status_is_visible_only_to_owner() {
    let app = app();
    create_order(&app, "alice", 2, "USD").await;
    let (_, history) = call(&app, Method::GET, "/api/v1/payments/history", "alice", None).await;
    let id = history[0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/payments/status/{}", id);

    let (status, body) = call(&app, Method::GET, &uri, "alice", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    let (status, _) = call(&app, Method::GET, &uri, "bob", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_status_id_is_not_found() {
    let app = app();
    let (status, _) = call(
        &app,
        Method::GET,
        "/api/v1/payments/status/not-a-uuid",
        "alice",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
