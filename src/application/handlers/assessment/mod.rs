//! Assessment handlers.
//!
//! ## Commands
//! - Submitting a level's answers
//!
//! ## Queries
//! - Get a level's questions
//! - Get the cumulative report
//! - Get per-level progress
//! - Get raw answer history
//! - Get the weakest assessed domains (records a view event)

mod get_focus_domains;
mod get_history;
mod get_progress;
mod get_questions;
mod get_report;
mod level_gate;
mod submit_answers;

// Commands
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult};

// Queries
pub use get_focus_domains::{
    FocusDomain, GetFocusDomainsHandler, GetFocusDomainsQuery, FOCUS_DOMAIN_COUNT,
};
pub use get_history::{GetHistoryHandler, GetHistoryQuery};
pub use get_progress::{GetProgressHandler, GetProgressQuery};
pub use get_questions::{GetQuestionsHandler, GetQuestionsQuery, GetQuestionsResult};
pub use get_report::{GetReportHandler, GetReportQuery};
