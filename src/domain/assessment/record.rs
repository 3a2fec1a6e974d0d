//! Stored assessment facts.

use serde_json::json;

use super::{AnswerLetter, Level, LifeDomain, Question};
use crate::domain::foundation::{AssessmentRecordId, Timestamp, UserId};

/// One answered question of one submission. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentRecord {
    pub id: AssessmentRecordId,
    pub user_id: UserId,
    pub level: Level,
    pub domain: LifeDomain,
    pub answer: AnswerLetter,
    /// Point value of `answer` at the time of submission.
    pub points: i64,
    /// Prompt text as shown when the answer was given.
    pub question_text: String,
    pub completed_at: Timestamp,
}

impl AssessmentRecord {
    /// Records an answer to a question.
    pub fn answer(
        user_id: UserId,
        question: &Question,
        answer: AnswerLetter,
        completed_at: Timestamp,
    ) -> Self {
        Self {
            id: AssessmentRecordId::new(),
            user_id,
            level: question.level,
            domain: question.domain,
            answer,
            points: answer.points(),
            question_text: question.text.en.to_string(),
            completed_at,
        }
    }
}

/// User activity event written alongside a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEvent {
    pub user_id: UserId,
    pub event_type: String,
    pub event_data: serde_json::Value,
    pub created_at: Timestamp,
}

impl TrackingEvent {
    pub const ASSESSMENT_COMPLETED: &'static str = "assessment_completed";
    pub const RECOMMENDATIONS_VIEWED: &'static str = "recommendations_viewed";

    pub fn assessment_completed(user_id: UserId, level: Level, at: Timestamp) -> Self {
        Self {
            user_id,
            event_type: Self::ASSESSMENT_COMPLETED.to_string(),
            event_data: json!({
                "level": level.number(),
                "timestamp": at.to_rfc3339(),
            }),
            created_at: at,
        }
    }

    /// The user was shown the domains to focus on next.
    pub fn recommendations_viewed(user_id: UserId, domains: &[LifeDomain], at: Timestamp) -> Self {
        let names: Vec<&str> = domains.iter().map(LifeDomain::name).collect();
        Self {
            user_id,
            event_type: Self::RECOMMENDATIONS_VIEWED.to_string(),
            event_data: json!({ "lowest_domains": names }),
            created_at: at,
        }
    }
}

/// Everything one accepted submission writes, as a single unit.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentSubmission {
    pub user_id: UserId,
    pub level: Level,
    pub records: Vec<AssessmentRecord>,
    pub event: TrackingEvent,
}
