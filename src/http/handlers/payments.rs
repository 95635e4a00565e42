use crate::domain::payment::CreatePaymentRequest;
use crate::error::PaymentError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, PaymentError> {
    let view = state.payment_service.create(req).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<impl IntoResponse, PaymentError> {
    let view = state.payment_service.get(payment_id)?;
    Ok((StatusCode::OK, Json(view)))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
