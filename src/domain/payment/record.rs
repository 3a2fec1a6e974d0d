//! Payment log entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Currency, PaymentError, PurchasableService};
use crate::domain::foundation::{PaymentId, Timestamp, UserId};

/// Lifecycle of a payment log entry.
///
/// ```text
/// Pending ──► Completed
///    │
///    └──────► Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "failed" => Some(PaymentStatus::Failed),
            _ => None,
        }
    }

    /// Only completed payments unlock anything.
    pub fn grants_access(&self) -> bool {
        matches!(self, PaymentStatus::Completed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One attempt to pay for a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub user_id: UserId,
    pub service: PurchasableService,
    pub amount: u32,
    pub currency: Currency,
    pub gateway: String,
    /// Gateway-side identifier of the order.
    pub transaction_id: String,
    pub status: PaymentStatus,
    pub failure_reason: Option<String>,
    pub is_refunded: bool,
    pub initiated_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl PaymentRecord {
    /// A freshly created order awaiting payer approval.
    pub fn pending(
        user_id: UserId,
        service: PurchasableService,
        currency: Currency,
        gateway: impl Into<String>,
        transaction_id: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: PaymentId::new(),
            user_id,
            service,
            amount: service.prices().amount(currency),
            currency,
            gateway: gateway.into(),
            transaction_id: transaction_id.into(),
            status: PaymentStatus::Pending,
            failure_reason: None,
            is_refunded: false,
            initiated_at: now,
            completed_at: None,
        }
    }

    /// Stored service key, e.g. `level_2`.
    pub fn service_type(&self) -> String {
        self.service.service_type()
    }

    /// Marks the payment as captured.
    pub fn complete(&mut self, now: Timestamp) -> Result<(), PaymentError> {
        self.ensure_pending("complete")?;
        self.status = PaymentStatus::Completed;
        self.completed_at = Some(now);
        Ok(())
    }

    /// Marks the payment as rejected by the gateway.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), PaymentError> {
        self.ensure_pending("fail")?;
        self.status = PaymentStatus::Failed;
        self.failure_reason = Some(reason.into());
        Ok(())
    }

    fn ensure_pending(&self, attempted: &str) -> Result<(), PaymentError> {
        if self.status != PaymentStatus::Pending {
            return Err(PaymentError::invalid_state(self.status.as_str(), attempted));
        }
        Ok(())
    }
}
