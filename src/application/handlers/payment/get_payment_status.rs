//! GetPaymentStatusHandler - Query handler for a single payment record.

use std::sync::Arc;

use crate::domain::foundation::{PaymentId, UserId};
use crate::domain::payment::{PaymentError, PaymentRecord};
use crate::ports::PaymentReader;

#[derive(Debug, Clone)]
pub struct GetPaymentStatusQuery {
    pub user_id: UserId,
    pub payment_id: PaymentId,
}

pub struct GetPaymentStatusHandler {
    reader: Arc<dyn PaymentReader>,
}

impl GetPaymentStatusHandler {
    pub fn new(reader: Arc<dyn PaymentReader>) -> Self {
        Self { reader }
    }

    /// Records of other users are reported as not found.
    pub async fn handle(&self, query: GetPaymentStatusQuery) -> Result<PaymentRecord, PaymentError> {
        self.reader
            .find_for_user(&query.user_id, &query.payment_id)
            .await?
            .ok_or_else(|| PaymentError::not_found(query.payment_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPaymentStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::payment::{Currency, PurchasableService};

    fn record() -> PaymentRecord {
        PaymentRecord::pending(
            UserId::new("owner").unwrap(),
            PurchasableService::LevelThree,
            Currency::Gbp,
            "mock",
            "PAY-1",
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn owner_sees_record() {
        let rec = record();
        let handler =
            GetPaymentStatusHandler::new(Arc::new(InMemoryPaymentStore::with_records(vec![rec.clone()])));

        let found = handler
            .handle(GetPaymentStatusQuery {
                user_id: rec.user_id.clone(),
                payment_id: rec.id,
            })
            .await
            .unwrap();

        assert_eq!(found, rec);
    }

    #[tokio::test]
    async fn other_user_gets_not_found() {
        let rec = record();
        let handler =
            GetPaymentStatusHandler::new(Arc::new(InMemoryPaymentStore::with_records(vec![rec.clone()])));

        let err = handler
            .handle(GetPaymentStatusQuery {
                user_id: UserId::new("someone-else").unwrap(),
                payment_id: rec.id,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::NotFound(_)));
    }
}
