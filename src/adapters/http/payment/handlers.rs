//! HTTP handlers for payment endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::ErrorResponse;
use crate::application::handlers::payment::{
    CreateOrderCommand, CreateOrderHandler, ExecutePaymentCommand, ExecutePaymentHandler,
    GetPaymentHistoryHandler, GetPaymentHistoryQuery, GetPaymentStatusHandler,
    GetPaymentStatusQuery,
};
use crate::domain::foundation::{ErrorCode, PaymentId};
use crate::domain::payment::PaymentError;
use crate::ports::{PaymentGateway, PaymentReader, PaymentRepository};

use super::dto::{
    CreateOrderRequest, CreateOrderResponse, ExecutePaymentRequest, ExecutePaymentResponse,
    PaymentRecordResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for payment routes.
#[derive(Clone)]
pub struct PaymentAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub payment_repository: Arc<dyn PaymentRepository>,
    pub payment_reader: Arc<dyn PaymentReader>,
    /// Base URL the gateway redirects the payer back to.
    pub frontend_url: String,
}

impl PaymentAppState {
    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(
            self.gateway.clone(),
            self.payment_repository.clone(),
            self.payment_reader.clone(),
            self.frontend_url.clone(),
        )
    }

    pub fn execute_payment_handler(&self) -> ExecutePaymentHandler {
        ExecutePaymentHandler::new(self.gateway.clone(), self.payment_repository.clone())
    }

    pub fn history_handler(&self) -> GetPaymentHistoryHandler {
        GetPaymentHistoryHandler::new(self.payment_reader.clone())
    }

    pub fn status_handler(&self) -> GetPaymentStatusHandler {
        GetPaymentStatusHandler::new(self.payment_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /payments/create-order - Start a gateway checkout
pub async fn create_order(
    State(state): State<PaymentAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let result = state
        .create_order_handler()
        .handle(CreateOrderCommand {
            user_id: user.id,
            level: request.level,
            currency: request.currency,
        })
        .await?;

    Ok(Json(CreateOrderResponse {
        status: "order_created",
        payment_id: result.record.transaction_id,
        approval_url: result.approval_url,
    }))
}

/// POST /payments/execute-payment - Capture an approved order
pub async fn execute_payment(
    State(state): State<PaymentAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<ExecutePaymentRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let result = state
        .execute_payment_handler()
        .handle(ExecutePaymentCommand {
            user_id: user.id,
            payment_id: request.payment_id,
            payer_id: request.payer_id,
        })
        .await?;

    Ok(Json(ExecutePaymentResponse {
        status: "payment_verified",
        message: "Payment successful. Level unlocked.",
        level: result.level,
        transaction_id: result.transaction_id,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /payments/history - The user's payments, newest first
pub async fn get_payment_history(
    State(state): State<PaymentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, PaymentApiError> {
    let records = state
        .history_handler()
        .handle(GetPaymentHistoryQuery { user_id: user.id })
        .await?;

    let items: Vec<PaymentRecordResponse> = records.iter().map(PaymentRecordResponse::from).collect();
    Ok(Json(items))
}

/// GET /payments/status/:id - One payment of the user
pub async fn get_payment_status(
    State(state): State<PaymentAppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let payment_id: PaymentId = id
        .parse()
        .map_err(|_| PaymentError::not_found(id.clone()))?;

    let record = state
        .status_handler()
        .handle(GetPaymentStatusQuery {
            user_id: user.id,
            payment_id,
        })
        .await?;

    Ok(Json(PaymentRecordResponse::from(&record)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts payment errors to HTTP responses.
#[derive(Debug)]
pub struct PaymentApiError(PaymentError);

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PaymentError::InvalidPricing { .. }
            | PaymentError::AlreadyPurchased { .. }
            | PaymentError::Declined { .. } => StatusCode::BAD_REQUEST,
            PaymentError::NotFound(_) => StatusCode::NOT_FOUND,
            PaymentError::InvalidState { .. } => StatusCode::CONFLICT,
            PaymentError::Gateway(_) => StatusCode::BAD_GATEWAY,
            PaymentError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self.0 {
            PaymentError::Infrastructure(_) => {
                ErrorResponse::new(
                    ErrorCode::InternalError.to_string(),
                    "Failed to process payment request",
                )
            }
            PaymentError::Gateway(_) => {
                ErrorResponse::new(self.0.code().to_string(), "Payment gateway error")
            }
            _ => ErrorResponse::new(self.0.code().to_string(), self.0.message()),
        };

        (status, Json(body)).into_response()
    }
}
