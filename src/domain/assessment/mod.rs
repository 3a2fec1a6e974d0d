//! Assessment domain module.
//!
//! Three levels of twelve questions, one per life domain. Answers are
//! stored as individual records; scores and feedback are derived from the
//! full history on demand.
//!
//! # Module Structure
//!
//! - `level` - Level 1-3 and their pricing
//! - `life_domain` - The twelve scored domains
//! - `answer` - Answer letters and point values
//! - `question_bank` - Static question catalog
//! - `record` - Stored answers and the completion event
//! - `scoring` - Submission validation and score aggregation
//! - `feedback` - Score thresholds and interpretation text
//! - `report` - Report and progress assembly

mod answer;
mod errors;
mod level;
mod life_domain;
mod question_bank;
mod record;
mod report;
mod scoring;

pub mod feedback;

pub use answer::AnswerLetter;
pub use errors::AssessmentError;
pub use feedback::{DomainBand, DomainFeedback, OverallStage, StageFeedback};
pub use level::{Level, UnknownLevel};
pub use life_domain::LifeDomain;
pub use question_bank::{LocalizedText, Question, QuestionBank, QuestionBankError, QUESTIONS_PER_LEVEL};
pub use record::{AssessmentRecord, AssessmentSubmission, TrackingEvent};
pub use report::{AssessmentProgress, AssessmentReport, DomainReport, LevelProgress};
pub use scoring::{cumulative_domain_scores, overall_score, DomainScores, ScoringEngine};
