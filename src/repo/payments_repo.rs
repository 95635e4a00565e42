use crate::domain::payment::PaymentRecord;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct PaymentsRepo {
    records: Arc<DashMap<Uuid, PaymentRecord>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` unless its id is already taken, then returns whatever
    /// record the id now maps to. An existing record is never replaced.
    pub fn insert(&self, record: PaymentRecord) -> Option<PaymentRecord> {
        let id = record.id;
        // The entry guard holds the shard lock, so check-and-set is atomic per key.
        self.records.entry(id).or_insert(record);
        self.get(&id)
    }

    pub fn get(&self, id: &Uuid) -> Option<PaymentRecord> {
        self.records.get(id).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentStatus;

    fn record(id: Uuid, status: PaymentStatus, amount: i64) -> PaymentRecord {
        PaymentRecord {
            id,
            status,
            masked_card_number: "************4444".to_string(),
            expiry_month: "01".to_string(),
            expiry_year: "2030".to_string(),
            currency: "GBP".to_string(),
            amount,
        }
    }

    #[test]
    fn insert_then_get() {
        let repo = PaymentsRepo::new();
        let id = Uuid::new_v4();
        let stored = repo.insert(record(id, PaymentStatus::Authorized, 100)).unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(repo.get(&id), Some(stored));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn unknown_id_is_absent() {
        let repo = PaymentsRepo::new();
        assert!(repo.get(&Uuid::new_v4()).is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn colliding_insert_keeps_first_record() {
        let repo = PaymentsRepo::new();
        let id = Uuid::new_v4();
        let first = record(id, PaymentStatus::Authorized, 100);

        repo.insert(first.clone());
        let second = repo.insert(record(id, PaymentStatus::Declined, 999)).unwrap();

        assert_eq!(second, first);
        assert_eq!(repo.get(&id), Some(first));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn clones_share_storage() {
        let repo = PaymentsRepo::new();
        let handle = repo.clone();
        let id = Uuid::new_v4();
        handle.insert(record(id, PaymentStatus::Declined, 1));
        assert!(repo.get(&id).is_some());
    }

    #[test]
    fn concurrent_inserts_on_one_id_agree() {
        let repo = PaymentsRepo::new();
        let id = Uuid::new_v4();

        let handles: Vec<_> = (1..=16)
            .map(|amount| {
                let repo = repo.clone();
                std::thread::spawn(move || {
                    let status = if amount % 2 == 0 {
                        PaymentStatus::Authorized
                    } else {
                        PaymentStatus::Declined
                    };
                    repo.insert(record(id, status, amount))
                })
            })
            .collect();

        let results: Vec<PaymentRecord> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();

        let winner = repo.get(&id).unwrap();
        assert!(results.iter().all(|r| *r == winner));
        assert_eq!(repo.len(), 1);
    }
}
