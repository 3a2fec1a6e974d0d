//! Assessment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | PaymentRequired | 402 |
//! | LevelNotFound | 404 |
//! | NoAssessmentData | 404 |
//! | AnswerCountMismatch | 400 |
//! | InvalidAnswer | 400 |
//! | Storage | 500 |

use crate::domain::foundation::{DomainError, ErrorCode};

/// Assessment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// The level is locked behind a payment the user has not completed.
    PaymentRequired { level: i64 },

    /// The requested level has no question set.
    LevelNotFound(i64),

    /// The user has not submitted any assessment yet.
    NoAssessmentData,

    /// A submission did not carry exactly one answer per question.
    AnswerCountMismatch { expected: usize, actual: usize },

    /// An answer at a given position is not one of A-D.
    InvalidAnswer { index: usize, value: String },

    /// Persistence failed. The detail is for logs only.
    Storage(String),
}

impl AssessmentError {
    pub fn payment_required(level: i64) -> Self {
        AssessmentError::PaymentRequired { level }
    }

    pub fn level_not_found(level: i64) -> Self {
        AssessmentError::LevelNotFound(level)
    }

    pub fn answer_count_mismatch(expected: usize, actual: usize) -> Self {
        AssessmentError::AnswerCountMismatch { expected, actual }
    }

    pub fn invalid_answer(index: usize, value: impl Into<String>) -> Self {
        AssessmentError::InvalidAnswer {
            index,
            value: value.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AssessmentError::Storage(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::PaymentRequired { .. } => ErrorCode::PaymentRequired,
            AssessmentError::LevelNotFound(_) => ErrorCode::LevelNotFound,
            AssessmentError::NoAssessmentData => ErrorCode::AssessmentNotFound,
            AssessmentError::AnswerCountMismatch { .. } => ErrorCode::AnswerCountMismatch,
            AssessmentError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            AssessmentError::Storage(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            AssessmentError::PaymentRequired { level } => format!(
                "Level {} requires payment. Please complete payment first.",
                level
            ),
            AssessmentError::LevelNotFound(level) => format!("Invalid level: {}", level),
            AssessmentError::NoAssessmentData => {
                "No assessment data found. Please complete an assessment.".to_string()
            }
            AssessmentError::AnswerCountMismatch { expected, actual } => {
                format!("Expected {} answers, got {}", expected, actual)
            }
            AssessmentError::InvalidAnswer { index, value } => {
                format!("Invalid answer for question {}: {}", index, value)
            }
            AssessmentError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }

    /// True for errors whose message must not reach the caller.
    pub fn is_internal(&self) -> bool {
        matches!(self, AssessmentError::Storage(_))
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        AssessmentError::Storage(err.to_string())
    }
}
