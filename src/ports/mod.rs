//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Assessment Ports
//!
//! - `AssessmentRepository` - Atomic persistence of a submission
//! - `AssessmentReader` - Record history for scoring, progress and listing
//! - `AccessChecker` - Payment-gated level access
//!
//! ## Payment Ports
//!
//! - `PaymentRepository` / `PaymentReader` - The payment log
//! - `PaymentGateway` - Hosted checkout with an external provider
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Bearer token validation

mod access_checker;
mod assessment_reader;
mod assessment_repository;
mod payment_gateway;
mod payment_reader;
mod payment_repository;
mod session_validator;

pub use access_checker::{AccessChecker, AccessDeniedReason, AccessResult};
pub use assessment_reader::{AssessmentReader, HistoryFilter};
pub use assessment_repository::AssessmentRepository;
pub use payment_gateway::{ExecutionOutcome, GatewayOrder, OrderRequest, PaymentGateway};
pub use payment_reader::PaymentReader;
pub use payment_repository::PaymentRepository;
pub use session_validator::SessionValidator;
