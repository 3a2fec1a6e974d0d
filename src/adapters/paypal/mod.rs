//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the PayPal REST payments API:
//! - OAuth client-credentials token exchange
//! - Payment creation with redirect URLs
//! - Execution of approved payments
//!
//! # Configuration
//!
//! Credentials come from the `payment` config section (mode, client id,
//! client secret). All secrets are held as `secrecy::SecretString`.

mod mock_gateway;
mod paypal_adapter;

pub use mock_gateway::{MethodCall, MockPaymentGateway, MOCK_APPROVAL_BASE};
pub use paypal_adapter::{PayPalConfig, PayPalGateway, PayPalMode};
