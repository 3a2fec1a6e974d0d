//! CreateOrderHandler - Command handler for starting a gateway checkout.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::payment::{Currency, PaymentError, PaymentRecord, PurchasableService};
use crate::ports::{OrderRequest, PaymentGateway, PaymentReader, PaymentRepository};

/// Command to create an order for a level (2, 3) or a consultation (4).
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub user_id: UserId,
    pub level: u32,
    pub currency: String,
}

/// Result of successful order creation.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    /// The stored pending record; its transaction id is the gateway order id.
    pub record: PaymentRecord,
    pub approval_url: String,
}

/// Handler for creating gateway orders.
///
/// The order is recorded as `pending`; nothing is unlocked until the
/// payer approves and the order is executed.
pub struct CreateOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
    repository: Arc<dyn PaymentRepository>,
    reader: Arc<dyn PaymentReader>,
    frontend_url: String,
}

impl CreateOrderHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        repository: Arc<dyn PaymentRepository>,
        reader: Arc<dyn PaymentReader>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            repository,
            reader,
            frontend_url: frontend_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, PaymentError> {
        info!(
            user_id = %cmd.user_id,
            level = cmd.level,
            currency = %cmd.currency,
            "Create order request"
        );

        // 1. Validate the service and currency combination
        let (service, currency) = match (
            PurchasableService::from_level_number(cmd.level),
            cmd.currency.parse::<Currency>(),
        ) {
            (Some(service), Ok(currency)) => (service, currency),
            _ => {
                warn!(level = cmd.level, currency = %cmd.currency, "Invalid pricing request");
                return Err(PaymentError::invalid_pricing(cmd.level, cmd.currency));
            }
        };

        // 2. Refuse a second purchase of the same service
        if self
            .reader
            .has_completed_payment(&cmd.user_id, &service.service_type())
            .await?
        {
            warn!(user_id = %cmd.user_id, level = cmd.level, "Service already purchased");
            return Err(PaymentError::already_purchased(cmd.level));
        }

        // 3. Place the order with the gateway
        let amount = service.prices().amount(currency);
        let order = self
            .gateway
            .create_order(&OrderRequest {
                service,
                currency,
                amount,
                return_url: format!("{}/payment/success", self.frontend_url),
                cancel_url: format!("{}/payment/cancel", self.frontend_url),
            })
            .await
            .map_err(|e| {
                error!(gateway = self.gateway.name(), error = %e, "Order creation failed");
                PaymentError::gateway(e.message)
            })?;

        // 4. Record the pending payment
        let record = PaymentRecord::pending(
            cmd.user_id,
            service,
            currency,
            self.gateway.name(),
            order.order_id,
            Timestamp::now(),
        );
        self.repository.save(&record).await.map_err(|e| {
            error!(error = %e, "Failed to save pending payment");
            PaymentError::from(e)
        })?;

        info!(
            user_id = %record.user_id,
            transaction_id = %record.transaction_id,
            amount = record.amount,
            "Order created"
        );

        Ok(CreateOrderResult {
            record,
            approval_url: order.approval_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPaymentStore;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::domain::payment::PaymentStatus;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn setup(gateway: MockPaymentGateway, store: Arc<InMemoryPaymentStore>) -> CreateOrderHandler {
        CreateOrderHandler::new(
            Arc::new(gateway),
            store.clone(),
            store,
            "http://localhost:3000/",
        )
    }

    fn command(level: u32, currency: &str) -> CreateOrderCommand {
        CreateOrderCommand {
            user_id: user(),
            level,
            currency: currency.to_string(),
        }
    }

    #[tokio::test]
    async fn creates_pending_record_with_table_price() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let gateway = MockPaymentGateway::new();
        let handler = setup(gateway.clone(), store.clone());

        let result = handler.handle(command(3, "INR")).await.unwrap();

        assert_eq!(result.record.amount, 1000);
        assert_eq!(result.record.status, PaymentStatus::Pending);
        assert_eq!(result.record.transaction_id, "MOCK-ORDER-1");
        assert_eq!(result.record.gateway, "mock");
        assert!(result.approval_url.contains("MOCK-ORDER-1"));

        let history = store.list_by_user(&user()).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(gateway.calls()[0].args, vec!["level_3", "INR", "1000"]);
    }

    #[tokio::test]
    async fn consultation_is_purchasable() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let result = setup(MockPaymentGateway::new(), store)
            .handle(command(4, "GBP"))
            .await
            .unwrap();
        assert_eq!(result.record.amount, 15);
        assert_eq!(result.record.service_type(), "level_4");
    }

    #[tokio::test]
    async fn level_one_and_unknown_levels_have_no_price() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let handler = setup(MockPaymentGateway::new(), store);

        for level in [0, 1, 5] {
            let err = handler.handle(command(level, "USD")).await.unwrap_err();
            assert!(matches!(err, PaymentError::InvalidPricing { .. }));
        }
    }

    #[tokio::test]
    async fn unsupported_currency_is_rejected_before_gateway() {
        let gateway = MockPaymentGateway::new();
        let handler = setup(gateway.clone(), Arc::new(InMemoryPaymentStore::new()));

        let err = handler.handle(command(2, "usd")).await.unwrap_err();

        assert_eq!(err.message(), "Invalid level or currency combination");
        assert_eq!(gateway.call_count("create_order"), 0);
    }

    #[tokio::test]
    async fn completed_purchase_blocks_second_order() {
        let mut paid = PaymentRecord::pending(
            user(),
            PurchasableService::LevelTwo,
            Currency::Usd,
            "mock",
            "OLD",
            Timestamp::now(),
        );
        paid.complete(Timestamp::now()).unwrap();
        let store = Arc::new(InMemoryPaymentStore::with_records(vec![paid]));

        let err = setup(MockPaymentGateway::new(), store)
            .handle(command(2, "GBP"))
            .await
            .unwrap_err();

        assert_eq!(err, PaymentError::already_purchased(2));
    }

    #[tokio::test]
    async fn pending_order_does_not_block_a_new_one() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let handler = setup(MockPaymentGateway::new(), store.clone());

        handler.handle(command(2, "USD")).await.unwrap();
        handler.handle(command(2, "USD")).await.unwrap();

        assert_eq!(store.list_by_user(&user()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn gateway_failure_stores_nothing() {
        let store = Arc::new(InMemoryPaymentStore::new());
        let err = setup(MockPaymentGateway::unavailable("timeout"), store.clone())
            .handle(command(2, "USD"))
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::Gateway(_)));
        assert!(store.list_by_user(&user()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn urls_point_back_to_frontend() {
        let gateway = MockPaymentGateway::new();
        let handler = setup(gateway.clone(), Arc::new(InMemoryPaymentStore::new()));
        handler.handle(command(2, "USD")).await.unwrap();
        assert_eq!(handler.frontend_url, "http://localhost:3000");
    }
}
