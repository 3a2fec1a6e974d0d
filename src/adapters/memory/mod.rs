//! In-memory adapters for tests and local development.
//!
//! - `InMemoryAssessmentStore` - AssessmentRepository + AssessmentReader
//! - `InMemoryPaymentStore` - PaymentRepository + PaymentReader
//!
//! Both keep the same atomicity guarantees as the PostgreSQL adapters and
//! can be told to fail, so error paths are testable without a database.

mod assessment_store;
mod payment_store;

pub use assessment_store::InMemoryAssessmentStore;
pub use payment_store::InMemoryPaymentStore;
