//! Mock payment gateway for testing.
//!
//! Deterministic order ids (`MOCK-ORDER-1`, `MOCK-ORDER-2`, ...), with
//! configurable declines and gateway failures, plus call tracking.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ExecutionOutcome, GatewayOrder, OrderRequest, PaymentGateway};

/// Base of the approval links handed out by the mock.
pub const MOCK_APPROVAL_BASE: &str = "https://mock-gateway.local/checkout";

/// Mock gateway. Clones share state.
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    orders_created: u32,
    decline_reason: Option<String>,
    unavailable: Option<String>,
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that refuses every execution with the given reason.
    pub fn declining(reason: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.state().decline_reason = Some(reason.into());
        mock
    }

    /// A gateway that fails every call as unreachable.
    pub fn unavailable(message: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.state().unavailable = Some(message.into());
        mock
    }

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    /// Get count of calls to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record_call(&self, method: &str, args: Vec<String>) -> Result<(), DomainError> {
        let mut state = self.state();
        state.call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
        match &state.unavailable {
            Some(message) => Err(DomainError::new(ErrorCode::GatewayError, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, DomainError> {
        self.record_call(
            "create_order",
            vec![
                request.service.service_type(),
                request.currency.code().to_string(),
                request.amount.to_string(),
            ],
        )?;

        let mut state = self.state();
        state.orders_created += 1;
        let order_id = format!("MOCK-ORDER-{}", state.orders_created);
        Ok(GatewayOrder {
            approval_url: format!("{}?token={}", MOCK_APPROVAL_BASE, order_id),
            order_id,
        })
    }

    async fn execute_order(
        &self,
        order_id: &str,
        payer_id: &str,
    ) -> Result<ExecutionOutcome, DomainError> {
        self.record_call(
            "execute_order",
            vec![order_id.to_string(), payer_id.to_string()],
        )?;

        Ok(match &self.state().decline_reason {
            Some(reason) => ExecutionOutcome::Declined {
                reason: reason.clone(),
            },
            None => ExecutionOutcome::Captured,
        })
    }
}
