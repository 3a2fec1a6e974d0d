//! Payment repository port (write side).

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::payment::PaymentRecord;
use async_trait::async_trait;

/// Repository port for the payment log.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Save a new payment record.
    async fn save(&self, record: &PaymentRecord) -> Result<(), DomainError>;

    /// Update status fields of an existing record.
    ///
    /// # Errors
    ///
    /// - `PaymentNotFound` if the record doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, record: &PaymentRecord) -> Result<(), DomainError>;

    /// Find the user's pending record for a gateway transaction.
    async fn find_pending_by_transaction(
        &self,
        user_id: &UserId,
        transaction_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError>;
}
