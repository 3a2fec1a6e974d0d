//! ExecutePaymentHandler - Command handler for capturing an approved order.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::payment::{PaymentError, PaymentRecord};
use crate::ports::{ExecutionOutcome, PaymentGateway, PaymentRepository};

/// Command to execute an order after payer approval.
#[derive(Debug, Clone)]
pub struct ExecutePaymentCommand {
    pub user_id: UserId,
    /// Gateway order id returned by order creation.
    pub payment_id: String,
    pub payer_id: String,
}

/// Result of a captured payment.
#[derive(Debug, Clone)]
pub struct ExecutePaymentResult {
    pub level: u32,
    pub transaction_id: String,
    pub record: PaymentRecord,
}

/// Handler for executing approved orders.
///
/// Only the user's own `pending` record can be executed. A declined
/// capture is persisted as `failed` before the error is returned.
pub struct ExecutePaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
    repository: Arc<dyn PaymentRepository>,
}

impl ExecutePaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>, repository: Arc<dyn PaymentRepository>) -> Self {
        Self {
            gateway,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: ExecutePaymentCommand,
    ) -> Result<ExecutePaymentResult, PaymentError> {
        info!(
            user_id = %cmd.user_id,
            payment_id = %cmd.payment_id,
            "Execute payment request"
        );

        // 1. Find our pending record
        let mut record = self
            .repository
            .find_pending_by_transaction(&cmd.user_id, &cmd.payment_id)
            .await?
            .ok_or_else(|| {
                warn!(payment_id = %cmd.payment_id, "No pending payment found");
                PaymentError::not_found(cmd.payment_id.clone())
            })?;

        // 2. Ask the gateway to capture
        let outcome = self
            .gateway
            .execute_order(&cmd.payment_id, &cmd.payer_id)
            .await
            .map_err(|e| {
                error!(gateway = self.gateway.name(), error = %e, "Payment execution failed");
                PaymentError::gateway(e.message)
            })?;

        // 3. Persist the outcome
        match outcome {
            ExecutionOutcome::Declined { reason } => {
                warn!(payment_id = %cmd.payment_id, reason = %reason, "Payment declined");
                record.fail(reason.clone())?;
                self.repository.update(&record).await?;
                Err(PaymentError::declined(reason))
            }
            ExecutionOutcome::Captured => {
                record.complete(Timestamp::now())?;
                self.repository.update(&record).await.map_err(|e| {
                    error!(
                        payment_id = %cmd.payment_id,
                        error = %e,
                        "Captured payment could not be marked completed"
                    );
                    PaymentError::from(e)
                })?;

                info!(user_id = %record.user_id, "Payment verified and completed");

                Ok(ExecutePaymentResult {
                    level: record.service.level_number(),
                    transaction_id: record.transaction_id.clone(),
                    record,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPaymentStore;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::domain::payment::{Currency, PaymentStatus, PurchasableService};
    use crate::ports::PaymentReader;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn pending(tx: &str) -> PaymentRecord {
        PaymentRecord::pending(
            user(),
            PurchasableService::LevelTwo,
            Currency::Usd,
            "mock",
            tx,
            Timestamp::now(),
        )
    }

    fn command(payment_id: &str) -> ExecutePaymentCommand {
        ExecutePaymentCommand {
            user_id: user(),
            payment_id: payment_id.to_string(),
            payer_id: "PAYER-1".to_string(),
        }
    }

    #[tokio::test]
    async fn captured_payment_unlocks_level() {
        let store = Arc::new(InMemoryPaymentStore::with_records(vec![pending("PAY-1")]));
        let handler = ExecutePaymentHandler::new(Arc::new(MockPaymentGateway::new()), store.clone());

        let result = handler.handle(command("PAY-1")).await.unwrap();

        assert_eq!(result.level, 2);
        assert_eq!(result.transaction_id, "PAY-1");
        assert_eq!(result.record.status, PaymentStatus::Completed);
        assert!(store.has_completed_payment(&user(), "level_2").await.unwrap());
    }

    #[tokio::test]
    async fn second_execution_finds_nothing_pending() {
        let store = Arc::new(InMemoryPaymentStore::with_records(vec![pending("PAY-1")]));
        let handler = ExecutePaymentHandler::new(Arc::new(MockPaymentGateway::new()), store);

        handler.handle(command("PAY-1")).await.unwrap();
        let err = handler.handle(command("PAY-1")).await.unwrap_err();

        assert!(matches!(err, PaymentError::NotFound(_)));
    }

    #[tokio::test]
    async fn other_users_order_is_not_found() {
        let store = Arc::new(InMemoryPaymentStore::with_records(vec![pending("PAY-1")]));
        let gateway = MockPaymentGateway::new();
        let handler = ExecutePaymentHandler::new(Arc::new(gateway.clone()), store);

        let err = handler
            .handle(ExecutePaymentCommand {
                user_id: UserId::new("intruder").unwrap(),
                ..command("PAY-1")
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::NotFound(_)));
        assert_eq!(gateway.call_count("execute_order"), 0);
    }

    #[tokio::test]
    async fn declined_payment_is_recorded_as_failed() {
        let store = Arc::new(InMemoryPaymentStore::with_records(vec![pending("PAY-1")]));
        let handler = ExecutePaymentHandler::new(
            Arc::new(MockPaymentGateway::declining("INSTRUMENT_DECLINED")),
            store.clone(),
        );

        let err = handler.handle(command("PAY-1")).await.unwrap_err();

        assert_eq!(err, PaymentError::declined("INSTRUMENT_DECLINED"));
        let records = store.list_by_user(&user()).await.unwrap();
        assert_eq!(records[0].status, PaymentStatus::Failed);
        assert_eq!(records[0].failure_reason.as_deref(), Some("INSTRUMENT_DECLINED"));
        assert!(!store.has_completed_payment(&user(), "level_2").await.unwrap());
    }

    #[tokio::test]
    async fn unreachable_gateway_leaves_record_pending() {
        let store = Arc::new(InMemoryPaymentStore::with_records(vec![pending("PAY-1")]));
        let handler = ExecutePaymentHandler::new(
            Arc::new(MockPaymentGateway::unavailable("timeout")),
            store.clone(),
        );

        let err = handler.handle(command("PAY-1")).await.unwrap_err();

        assert!(matches!(err, PaymentError::Gateway(_)));
        let records = store.list_by_user(&user()).await.unwrap();
        assert_eq!(records[0].status, PaymentStatus::Pending);
    }
}
