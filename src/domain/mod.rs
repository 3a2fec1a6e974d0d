//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, auth, errors)
//! - `assessment` - Questions, scoring, feedback and reports
//! - `payment` - Pricing and the payment log that unlocks levels

pub mod assessment;
pub mod foundation;
pub mod payment;
