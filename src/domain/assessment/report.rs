//! Report and progress assembly.

use std::collections::{BTreeMap, BTreeSet};

use super::feedback::{domain_feedback, overall_stage, DomainFeedback, StageFeedback};
use super::question_bank::QUESTIONS_PER_LEVEL;
use super::{AssessmentError, AssessmentRecord, DomainScores, Level, LifeDomain};
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::payment::PriceTable;

/// Feedback attached to one domain's cumulative score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainReport {
    pub score: i64,
    pub feedback: &'static DomainFeedback,
}

/// Full interpretation of a user's assessment history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentReport {
    pub user_id: UserId,
    pub generated_at: Timestamp,
    pub completed_levels: Vec<Level>,
    pub overall_score: i64,
    pub overall_stage: &'static StageFeedback,
    pub domain_scores: DomainScores,
    pub domain_feedback: BTreeMap<LifeDomain, DomainReport>,
    pub is_complete: bool,
}

impl AssessmentReport {
    /// Builds a report from every record the user has.
    ///
    /// A level counts as completed as soon as it has any record.
    pub fn build(
        user_id: UserId,
        records: &[AssessmentRecord],
        generated_at: Timestamp,
    ) -> Result<Self, AssessmentError> {
        let completed: BTreeSet<Level> = records.iter().map(|r| r.level).collect();
        if completed.is_empty() {
            return Err(AssessmentError::NoAssessmentData);
        }

        let domain_scores = DomainScores::from_records(records);
        let overall_score = domain_scores.overall();
        let domain_feedback = domain_scores
            .iter()
            .map(|(domain, score)| {
                (
                    domain,
                    DomainReport {
                        score,
                        feedback: domain_feedback(score),
                    },
                )
            })
            .collect();

        Ok(Self {
            user_id,
            generated_at,
            is_complete: completed.len() == Level::ALL.len(),
            completed_levels: completed.into_iter().collect(),
            overall_score,
            overall_stage: overall_stage(overall_score),
            domain_scores,
            domain_feedback,
        })
    }
}

/// Completion and unlock state of one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: Level,
    /// Exactly one full set of answers is on record.
    pub completed: bool,
    pub questions_answered: u32,
    pub unlocked: bool,
    pub price: PriceTable,
}

impl LevelProgress {
    pub fn new(level: Level, questions_answered: u32, unlocked: bool) -> Self {
        Self {
            level,
            completed: questions_answered as usize == QUESTIONS_PER_LEVEL,
            questions_answered,
            unlocked,
            price: level.prices(),
        }
    }
}

/// Progress over all three levels, in level order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentProgress {
    pub levels: Vec<LevelProgress>,
}
