//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresAssessmentRepository` - Transactional submission writes
//! - `PostgresAssessmentReader` - History, report and progress queries
//! - `PostgresPaymentRepository` / `PostgresPaymentReader` - The payment log

mod assessment_reader;
mod assessment_repository;
mod payment_reader;
mod payment_repository;
mod payment_row;

pub use assessment_reader::PostgresAssessmentReader;
pub use assessment_repository::PostgresAssessmentRepository;
pub use payment_reader::PostgresPaymentReader;
pub use payment_repository::PostgresPaymentRepository;
