//! Payment gateway port.
//!
//! Two-step hosted checkout: an order is created and the payer approves it
//! on the gateway's site, then the approved order is executed.

use crate::domain::foundation::DomainError;
use crate::domain::payment::{Currency, PurchasableService};
use async_trait::async_trait;

/// Port for the external payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Short gateway name stored on payment records.
    fn name(&self) -> &'static str;

    /// Create an order and return where the payer must approve it.
    ///
    /// # Errors
    ///
    /// - `GatewayError` if the gateway is unreachable or refuses the order
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, DomainError>;

    /// Capture an order the payer approved.
    ///
    /// A refusal by the gateway is a normal outcome, not an error.
    async fn execute_order(
        &self,
        order_id: &str,
        payer_id: &str,
    ) -> Result<ExecutionOutcome, DomainError>;
}

/// Order to be placed with the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub service: PurchasableService,
    pub currency: Currency,
    pub amount: u32,
    pub return_url: String,
    pub cancel_url: String,
}

/// An order created on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOrder {
    /// Gateway-side order id; stored as the record's transaction id.
    pub order_id: String,
    pub approval_url: String,
}

/// Result of executing an approved order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Captured,
    Declined { reason: String },
}
