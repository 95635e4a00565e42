use crate::domain::currency;
use crate::domain::payment::{CreatePaymentRequest, ValidatedPayment};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

pub const CARD_NUMBER: &str = "card_number";
pub const EXPIRY_MONTH: &str = "expiry_month";
pub const EXPIRY_YEAR: &str = "expiry_year";
pub const EXPIRY_DATE: &str = "expiry_date";
pub const CURRENCY: &str = "currency";
pub const AMOUNT: &str = "amount";
pub const CVV: &str = "cvv";

const MUST_NOT_BE_NULL: &str = "must not be null";
const MUST_BE_INTEGER: &str = "must be an integer";
const CURRENCY_NOT_VALID: &str = "is not valid";
const AMOUNT_TOO_SMALL: &str = "Amount is Required; Amount must be at least 1";
const MONTH_TOO_SMALL: &str = "Month must be at least 01";
const MONTH_TOO_LARGE: &str = "Month must be at most 12";
const EXPIRY_NOT_IN_FUTURE: &str =
    "Card expiry date(expiry_month + expiry_year) must be in the future";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn by_field(&self) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        for v in &self.violations {
            out.entry(v.field).or_insert_with(|| v.message.clone());
        }
        out
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.by_field().into_keys().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Checks every rule and collects all violations. The only rule that depends
/// on another is the future-expiry check, which runs only once month and year
/// are both usable.
pub fn validate(
    req: &CreatePaymentRequest,
    now: DateTime<Utc>,
) -> Result<ValidatedPayment, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let card_number = digits(
        req.card_number.as_ref(),
        CARD_NUMBER,
        "Card number",
        14..=19,
        &mut errors,
    );
    let cvv = digits(req.cvv.as_ref(), CVV, "CVV", 3..=4, &mut errors);
    let expiry_month = month(req.expiry_month.as_ref(), &mut errors);
    let expiry_year = year(req.expiry_year.as_ref(), &mut errors);
    let currency = currency_code(req.currency.as_ref(), &mut errors);
    let amount = amount(req.amount.as_ref(), &mut errors);

    if let (Some(m), Some(y)) = (expiry_month, expiry_year) {
        if (y, m) <= (now.year(), now.month()) {
            errors.push(EXPIRY_DATE, EXPIRY_NOT_IN_FUTURE);
        }
    }

    match (card_number, cvv, expiry_month, expiry_year, currency, amount) {
        (Some(card_number), Some(cvv), Some(expiry_month), Some(expiry_year), Some(currency), Some(amount))
            if errors.is_empty() =>
        {
            Ok(ValidatedPayment {
                card_number,
                expiry_month,
                expiry_year,
                currency,
                amount,
                cvv,
            })
        }
        _ => Err(errors),
    }
}

fn digits(
    value: Option<&serde_json::Value>,
    field: &'static str,
    label: &str,
    len: RangeInclusive<usize>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let Some(value) = value else {
        errors.push(field, MUST_NOT_BE_NULL);
        return None;
    };
    let Some(value) = text(value) else {
        errors.push(field, format!("{label} must contain only numeric characters"));
        return None;
    };

    let mut ok = true;
    if !len.contains(&value.chars().count()) {
        errors.push(
            field,
            format!(
                "{label} must be between {} and {} characters long",
                len.start(),
                len.end()
            ),
        );
        ok = false;
    }
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        errors.push(field, format!("{label} must contain only numeric characters"));
        ok = false;
    }

    ok.then(|| value.to_string())
}

fn month(value: Option<&serde_json::Value>, errors: &mut ValidationErrors) -> Option<u32> {
    let m = integer(value, EXPIRY_MONTH, errors)?;
    if m < 1 {
        errors.push(EXPIRY_MONTH, MONTH_TOO_SMALL);
        return None;
    }
    if m > 12 {
        errors.push(EXPIRY_MONTH, MONTH_TOO_LARGE);
        return None;
    }
    u32::try_from(m).ok()
}

fn year(value: Option<&serde_json::Value>, errors: &mut ValidationErrors) -> Option<i32> {
    let y = integer(value, EXPIRY_YEAR, errors)?;
    match i32::try_from(y) {
        Ok(y) => Some(y),
        Err(_) => {
            errors.push(EXPIRY_YEAR, MUST_BE_INTEGER);
            None
        }
    }
}

fn currency_code(
    value: Option<&serde_json::Value>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let normalized = value
        .and_then(text)
        .and_then(|code| currency::normalize(&code));
    if normalized.is_none() {
        errors.push(CURRENCY, CURRENCY_NOT_VALID);
    }
    normalized
}

fn amount(value: Option<&serde_json::Value>, errors: &mut ValidationErrors) -> Option<i64> {
    let Some(raw) = value else {
        errors.push(AMOUNT, AMOUNT_TOO_SMALL);
        return None;
    };
    let a = integer(Some(raw), AMOUNT, errors)?;
    if a < 1 {
        errors.push(AMOUNT, AMOUNT_TOO_SMALL);
        return None;
    }
    Some(a)
}

// Numbers become their decimal text; arrays, objects and booleans are not text.
fn text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn integer(
    value: Option<&serde_json::Value>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    let Some(value) = value else {
        errors.push(field, MUST_NOT_BE_NULL);
        return None;
    };

    let parsed = match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        errors.push(field, MUST_BE_INTEGER);
    }
    parsed
}
