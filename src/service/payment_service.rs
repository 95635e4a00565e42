use crate::bank::{AuthorizationRequest, Authorizer};
use crate::domain::payment::{CreatePaymentRequest, PaymentStatus, PaymentView};
use crate::domain::projection::to_view;
use crate::domain::record::build_record;
use crate::domain::validation::validate;
use crate::error::PaymentError;
use crate::repo::payments_repo::PaymentsRepo;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub authorizer: Arc<dyn Authorizer>,
}

impl PaymentService {
    pub fn new(payments_repo: PaymentsRepo, authorizer: Arc<dyn Authorizer>) -> Self {
        Self {
            payments_repo,
            authorizer,
        }
    }

    pub async fn create(&self, req: CreatePaymentRequest) -> Result<PaymentView, PaymentError> {
        tracing::debug!("creating a new payment");

        let payment = validate(&req, chrono::Utc::now()).map_err(|errors| {
            tracing::debug!(%errors, "payment request rejected");
            PaymentError::ValidationFailed(errors)
        })?;

        let start = Instant::now();
        let verdict = self
            .authorizer
            .authorize(&AuthorizationRequest::from(&payment))
            .await
            .map_err(|e| {
                tracing::warn!(
                    bank = self.authorizer.name(),
                    latency_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "bank authorization failed"
                );
                PaymentError::Unavailable(e.to_string())
            })?;

        let status = PaymentStatus::from_verdict(verdict.authorized);
        let id = Uuid::new_v4();
        let record = build_record(id, &payment, status).map_err(|e| {
            tracing::error!(error = %e, "card number failed masking after validation");
            PaymentError::Internal(e.into())
        })?;

        let stored = self.payments_repo.insert(record).ok_or_else(|| {
            tracing::error!(payment_id = %id, "payment record missing after insert");
            PaymentError::RecordNotPersisted
        })?;

        tracing::info!(
            payment_id = %stored.id,
            status = stored.status.as_str(),
            card = %stored.masked_card_number,
            authorization_code = verdict.authorization_code.as_deref().unwrap_or("none"),
            latency_ms = start.elapsed().as_millis() as u64,
            "payment processed"
        );

        Ok(to_view(&stored))
    }

    pub fn get(&self, id: Uuid) -> Result<PaymentView, PaymentError> {
        tracing::debug!(payment_id = %id, "looking up payment");
        self.payments_repo
            .get(&id)
            .map(|record| to_view(&record))
            .ok_or(PaymentError::NotFound(id))
    }
}
