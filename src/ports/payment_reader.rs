//! Payment reader port (read side).

use crate::domain::foundation::{DomainError, PaymentId, UserId};
use crate::domain::payment::PaymentRecord;
use async_trait::async_trait;

/// Reader port for the payment log.
#[async_trait]
pub trait PaymentReader: Send + Sync {
    /// True if a `completed` record exists for the user and service key.
    ///
    /// Pending and failed records never count.
    async fn has_completed_payment(
        &self,
        user_id: &UserId,
        service_type: &str,
    ) -> Result<bool, DomainError>;

    /// All records of the user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<PaymentRecord>, DomainError>;

    /// One record, only if it belongs to the user.
    async fn find_for_user(
        &self,
        user_id: &UserId,
        id: &PaymentId,
    ) -> Result<Option<PaymentRecord>, DomainError>;
}
