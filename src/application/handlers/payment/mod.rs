//! Payment handlers.
//!
//! ## Commands
//! - Creating a gateway order for a paid level or consultation
//! - Executing an order the payer approved
//!
//! ## Queries
//! - Payment history
//! - Status of one payment

mod create_order;
mod execute_payment;
mod get_payment_history;
mod get_payment_status;

// Commands
pub use create_order::{CreateOrderCommand, CreateOrderHandler, CreateOrderResult};
pub use execute_payment::{ExecutePaymentCommand, ExecutePaymentHandler, ExecutePaymentResult};

// Queries
pub use get_payment_history::{GetPaymentHistoryHandler, GetPaymentHistoryQuery};
pub use get_payment_status::{GetPaymentStatusHandler, GetPaymentStatusQuery};
