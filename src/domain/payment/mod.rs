//! Payment domain module.
//!
//! Pricing of purchasable services and the payment log that unlocks
//! paid assessment levels.
//!
//! # Module Structure
//!
//! - `currency` - Supported currencies
//! - `service` - Purchasable services and their price table
//! - `record` - PaymentRecord and its status lifecycle
//! - `errors` - Payment-specific errors

mod currency;
mod errors;
mod record;
mod service;

pub use currency::Currency;
pub use errors::PaymentError;
pub use record::{PaymentRecord, PaymentStatus};
pub use service::{service_type_for_level, PriceTable, PurchasableService};
