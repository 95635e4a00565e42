use crate::domain::masking::{mask_card_number, MaskError};
use crate::domain::payment::{PaymentRecord, PaymentStatus, ValidatedPayment};
use uuid::Uuid;

pub fn build_record(
    id: Uuid,
    payment: &ValidatedPayment,
    status: PaymentStatus,
) -> Result<PaymentRecord, MaskError> {
    Ok(PaymentRecord {
        id,
        status,
        masked_card_number: mask_card_number(&payment.card_number)?,
        expiry_month: format!("{:02}", payment.expiry_month),
        expiry_year: payment.expiry_year.to_string(),
        currency: payment.currency.clone(),
        amount: payment.amount,
    })
}
