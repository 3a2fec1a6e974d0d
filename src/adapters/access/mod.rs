//! Access adapters - implementations of the AccessChecker port.
//!
//! - `PaymentAccessChecker` - Level access backed by the payment log

mod payment_access_checker;

pub use payment_access_checker::PaymentAccessChecker;
