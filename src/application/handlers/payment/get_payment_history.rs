//! GetPaymentHistoryHandler - Query handler for a user's payment log.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::payment::{PaymentError, PaymentRecord};
use crate::ports::PaymentReader;

#[derive(Debug, Clone)]
pub struct GetPaymentHistoryQuery {
    pub user_id: UserId,
}

pub struct GetPaymentHistoryHandler {
    reader: Arc<dyn PaymentReader>,
}

impl GetPaymentHistoryHandler {
    pub fn new(reader: Arc<dyn PaymentReader>) -> Self {
        Self { reader }
    }

    /// All records of the user, newest first.
    pub async fn handle(
        &self,
        query: GetPaymentHistoryQuery,
    ) -> Result<Vec<PaymentRecord>, PaymentError> {
        info!(user_id = %query.user_id, "Payment history requested");
        Ok(self.reader.list_by_user(&query.user_id).await?)
    }
}
