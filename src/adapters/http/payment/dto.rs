//! Request and response DTOs for payment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::payment::PaymentRecord;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub level: u32,
    /// ISO code, e.g. "USD", "GBP", "INR".
    pub currency: String,
}

/// Body sent back by the frontend after gateway approval.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutePaymentRequest {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    #[serde(rename = "PayerID")]
    pub payer_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderResponse {
    pub status: &'static str,
    /// Gateway order id, echoed back on execution.
    pub payment_id: String,
    pub approval_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutePaymentResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub level: u32,
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRecordResponse {
    pub id: String,
    pub user_id: String,
    pub amount: String,
    pub currency: &'static str,
    pub payment_gateway: String,
    pub transaction_id: String,
    pub service_type: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    pub is_refunded: bool,
    pub initiated_at: String,
    pub completed_at: Option<String>,
}

impl From<&PaymentRecord> for PaymentRecordResponse {
    fn from(r: &PaymentRecord) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id.to_string(),
            amount: r.amount.to_string(),
            currency: r.currency.code(),
            payment_gateway: r.gateway.clone(),
            transaction_id: r.transaction_id.clone(),
            service_type: r.service_type(),
            status: r.status.as_str(),
            failure_reason: r.failure_reason.clone(),
            is_refunded: r.is_refunded,
            initiated_at: r.initiated_at.to_rfc3339(),
            completed_at: r.completed_at.map(|t| t.to_rfc3339()),
        }
    }
}
