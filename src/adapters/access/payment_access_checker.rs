//! AccessChecker backed by the payment log.
//!
//! Level 1 is open to everyone. Any other requested number is open only
//! when a `completed` payment for `level_{N}` exists. The payment log is
//! queried on every call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::assessment::Level;
use crate::domain::payment::service_type_for_level;
use crate::ports::{AccessChecker, AccessDeniedReason, AccessResult, PaymentReader};

pub struct PaymentAccessChecker {
    payments: Arc<dyn PaymentReader>,
}

impl PaymentAccessChecker {
    pub fn new(payments: Arc<dyn PaymentReader>) -> Self {
        Self { payments }
    }
}

#[async_trait]
impl AccessChecker for PaymentAccessChecker {
    async fn can_access_level(
        &self,
        user_id: &UserId,
        level: i64,
    ) -> Result<AccessResult, DomainError> {
        if Level::from_number(level).is_some_and(|l| !l.requires_payment()) {
            return Ok(AccessResult::Allowed);
        }

        let paid = self
            .payments
            .has_completed_payment(user_id, &service_type_for_level(level))
            .await?;

        if paid {
            Ok(AccessResult::Allowed)
        } else {
            Ok(AccessResult::Denied(AccessDeniedReason::PaymentRequired { level }))
        }
    }
}
