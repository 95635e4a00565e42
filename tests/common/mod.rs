#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use card_payment_gateway::bank::Authorizer;
use card_payment_gateway::http::routes::build_router;
use card_payment_gateway::repo::payments_repo::PaymentsRepo;
use card_payment_gateway::service::payment_service::PaymentService;
use card_payment_gateway::AppState;
use chrono::Datelike;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub fn app(authorizer: Arc<dyn Authorizer>) -> (Router, PaymentsRepo) {
    let repo = PaymentsRepo::new();
    let state = AppState {
        payment_service: PaymentService::new(repo.clone(), authorizer),
    };
    (build_router(state), repo)
}

/// A valid create body; the expiry year is always next year so it stays in the future.
pub fn payment_body(card_number: &str) -> Value {
    json!({
        "card_number": card_number,
        "expiry_month": 12,
        "expiry_year": chrono::Utc::now().year() + 1,
        "currency": "GBP",
        "amount": 10,
        "cvv": "123"
    })
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
