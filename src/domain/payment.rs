use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Authorized,
    Declined,
}

impl PaymentStatus {
    pub fn from_verdict(authorized: bool) -> Self {
        if authorized {
            PaymentStatus::Authorized
        } else {
            PaymentStatus::Declined
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Authorized => "AUTHORIZED",
            PaymentStatus::Declined => "DECLINED",
        }
    }
}

// Fields stay raw JSON so that missing or oddly typed values become field
// violations instead of an extractor rejection. Callers send both `12` and `"12"`.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub card_number: Option<serde_json::Value>,
    pub expiry_month: Option<serde_json::Value>,
    pub expiry_year: Option<serde_json::Value>,
    pub currency: Option<serde_json::Value>,
    pub amount: Option<serde_json::Value>,
    pub cvv: Option<serde_json::Value>,
}

impl fmt::Debug for CreatePaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatePaymentRequest")
            .field("card_number", &self.card_number.as_ref().map(|_| "<redacted>"))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &self.cvv.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// Still carries the clear card number and CVV.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedPayment {
    pub card_number: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl ValidatedPayment {
    pub fn expiry_date(&self) -> String {
        format!("{:02}/{}", self.expiry_month, self.expiry_year)
    }
}

impl fmt::Debug for ValidatedPayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedPayment")
            .field("card_number", &"<redacted>")
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub masked_card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub currency: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentView {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub currency: String,
    pub amount: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
