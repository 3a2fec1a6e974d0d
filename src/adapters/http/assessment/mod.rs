//! HTTP adapter for assessment endpoints.
//!
//! - `GET /api/v1/assessment/questions/:level` - Questions of a level
//! - `POST /api/v1/assessment/submit/:level` - Submit twelve answers
//! - `GET /api/v1/assessment/report` - Cumulative report
//! - `GET /api/v1/assessment/progress` - Per-level progress
//! - `GET /api/v1/assessment/history` - Raw answer history
//! - `GET /api/v1/assessment/recommendations` - Weakest assessed domains

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::{assessment_router, assessment_routes};
