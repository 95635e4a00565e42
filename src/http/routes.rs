use crate::http::handlers::{ops, payments};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(payments::health))
        .route("/payments", post(payments::create_payment))
        .route("/payments/:payment_id", get(payments::get_payment))
        .route("/payment/:payment_id", get(payments::get_payment))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .with_state(state)
}
