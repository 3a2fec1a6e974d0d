//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_order, execute_payment, get_payment_history, get_payment_status, PaymentAppState,
};

/// Create the payment API router.
///
/// # Routes (all require authentication)
/// - `POST /create-order` - Start a gateway checkout
/// - `POST /execute-payment` - Capture an approved order
/// - `GET /history` - Payment history
/// - `GET /status/:id` - One payment record
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/execute-payment", post(execute_payment))
        .route("/history", get(get_payment_history))
        .route("/status/:id", get(get_payment_status))
}

/// Create the payment module router, mounted under `/payments`.
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().nest("/payments", payment_routes())
}
