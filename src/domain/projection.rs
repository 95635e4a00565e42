use crate::domain::payment::{PaymentRecord, PaymentView};

pub fn to_view(record: &PaymentRecord) -> PaymentView {
    PaymentView {
        id: record.id,
        status: record.status,
        card_number_last_four: record.masked_card_number.clone(),
        expiry_month: record.expiry_month.clone(),
        expiry_year: record.expiry_year.clone(),
        currency: record.currency.clone(),
        amount: record.amount,
    }
}
