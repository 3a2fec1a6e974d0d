//! In-memory payment log.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, UserId};
use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::ports::{PaymentReader, PaymentRepository};

#[derive(Default)]
pub struct InMemoryPaymentStore {
    records: RwLock<Vec<PaymentRecord>>,
    fail_reads: bool,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with records.
    pub fn with_records(records: Vec<PaymentRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            fail_reads: false,
        }
    }

    /// A store whose reads always fail.
    pub fn failing() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            fail_reads: true,
        }
    }

    fn check_reads(&self) -> Result<(), DomainError> {
        if self.fail_reads {
            return Err(DomainError::database("Simulated read failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentStore {
    async fn save(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn update(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PaymentNotFound,
                format!("Payment not found: {}", record.id),
            )),
        }
    }

    async fn find_pending_by_transaction(
        &self,
        user_id: &UserId,
        transaction_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        self.check_reads()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| {
                &r.user_id == user_id
                    && r.transaction_id == transaction_id
                    && r.status == PaymentStatus::Pending
            })
            .cloned())
    }
}

#[async_trait]
impl PaymentReader for InMemoryPaymentStore {
    async fn has_completed_payment(
        &self,
        user_id: &UserId,
        service_type: &str,
    ) -> Result<bool, DomainError> {
        self.check_reads()?;
        let records = self.records.read().await;
        Ok(records.iter().any(|r| {
            &r.user_id == user_id && r.service_type() == service_type && r.status.grants_access()
        }))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<PaymentRecord>, DomainError> {
        self.check_reads()?;
        let records = self.records.read().await;
        let mut mine: Vec<PaymentRecord> = records
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.initiated_at.cmp(&a.initiated_at));
        Ok(mine)
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: &PaymentId,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        self.check_reads()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| &r.id == id && &r.user_id == user_id)
            .cloned())
    }
}
