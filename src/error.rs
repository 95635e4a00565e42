use crate::domain::payment::ErrorResponse;
use crate::domain::validation::ValidationErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use uuid::Uuid;

pub const BANK_UNAVAILABLE_MESSAGE: &str = "Bank payment service unavailable";

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("bank unavailable: {0}")]
    Unavailable(String),

    #[error("Payment with id {0} not found")]
    NotFound(Uuid),

    #[error("Payment not created")]
    RecordNotPersisted,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PaymentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            PaymentError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            PaymentError::NotFound(_) => StatusCode::NOT_FOUND,
            PaymentError::RecordNotPersisted | PaymentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            PaymentError::ValidationFailed(errors) => (status, Json(errors.by_field())).into_response(),
            PaymentError::Unavailable(_) => message(status, BANK_UNAVAILABLE_MESSAGE),
            PaymentError::Internal(_) => message(status, "internal error"),
            other => message(status, &other.to_string()),
        }
    }
}

fn message(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let id = Uuid::new_v4();
        let err = PaymentError::NotFound(id);
        assert_eq!(err.to_string(), format!("Payment with id {id} not found"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn each_kind_has_a_distinct_status() {
        assert_eq!(
            PaymentError::ValidationFailed(ValidationErrors::default()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PaymentError::Unavailable("timeout".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            PaymentError::RecordNotPersisted.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
