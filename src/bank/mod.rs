use crate::domain::payment::ValidatedPayment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mock;
pub mod simulator;

// Carries the clear card number and CVV; no Debug.
#[derive(Clone, Serialize)]
pub struct AuthorizationRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl From<&ValidatedPayment> for AuthorizationRequest {
    fn from(payment: &ValidatedPayment) -> Self {
        Self {
            card_number: payment.card_number.clone(),
            expiry_date: payment.expiry_date(),
            currency: payment.currency.clone(),
            amount: payment.amount,
            cvv: payment.cvv.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationVerdict {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
}

#[derive(Debug, Error)]
pub enum AuthorizerError {
    #[error("bank call timed out")]
    Timeout,
    #[error("bank transport error: {0}")]
    Transport(String),
    #[error("bank returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("bank response could not be parsed: {0}")]
    Body(String),
    #[error("bank unavailable: {0}")]
    Unavailable(String),
}

#[async_trait::async_trait]
pub trait Authorizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<AuthorizationVerdict, AuthorizerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_body_uses_simulator_field_names() {
        let payment = ValidatedPayment {
            card_number: "2222405343248877".to_string(),
            expiry_month: 4,
            expiry_year: 2027,
            currency: "GBP".to_string(),
            amount: 100,
            cvv: "123".to_string(),
        };
        let body = serde_json::to_value(AuthorizationRequest::from(&payment)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "card_number": "2222405343248877",
                "expiry_date": "04/2027",
                "currency": "GBP",
                "amount": 100,
                "cvv": "123"
            })
        );
    }

    #[test]
    fn verdict_code_is_optional() {
        let v: AuthorizationVerdict = serde_json::from_str(r#"{"authorized": false}"#).unwrap();
        assert!(!v.authorized);
        assert!(v.authorization_code.is_none());

        let v: AuthorizationVerdict = serde_json::from_str(
            r#"{"authorized": true, "authorization_code": "0bb07405-6d44-4b50-a14f-7ae0beff13ad"}"#,
        )
        .unwrap();
        assert!(v.authorized);
        assert_eq!(
            v.authorization_code.as_deref(),
            Some("0bb07405-6d44-4b50-a14f-7ae0beff13ad")
        );
    }

    #[test]
    fn missing_authorized_flag_is_an_error() {
        assert!(serde_json::from_str::<AuthorizationVerdict>(r#"{"authorization_code": "x"}"#).is_err());
    }
}
