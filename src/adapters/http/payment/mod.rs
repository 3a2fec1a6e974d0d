//! HTTP adapter for payment endpoints.
//!
//! - `POST /api/v1/payments/create-order` - Start a gateway checkout
//! - `POST /api/v1/payments/execute-payment` - Capture an approved order
//! - `GET /api/v1/payments/history` - Payment history
//! - `GET /api/v1/payments/status/:id` - One payment record

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::{payment_router, payment_routes};
