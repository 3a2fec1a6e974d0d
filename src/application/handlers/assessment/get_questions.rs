//! GetQuestionsHandler - Query handler for a level's questions.

use std::sync::Arc;

use tracing::info;

use super::level_gate::open_level;
use crate::domain::assessment::{AssessmentError, Level, Question, QuestionBank};
use crate::domain::foundation::UserId;
use crate::ports::AccessChecker;

/// Query for the questions of one level.
#[derive(Debug, Clone)]
pub struct GetQuestionsQuery {
    pub user_id: UserId,
    /// Requested level number, not yet validated.
    pub level: i64,
}

/// The level's questions in answer-key order.
#[derive(Debug, Clone)]
pub struct GetQuestionsResult {
    pub level: Level,
    pub questions: Vec<Question>,
}

pub struct GetQuestionsHandler {
    access_checker: Arc<dyn AccessChecker>,
    bank: &'static QuestionBank,
}

impl GetQuestionsHandler {
    pub fn new(access_checker: Arc<dyn AccessChecker>, bank: &'static QuestionBank) -> Self {
        Self {
            access_checker,
            bank,
        }
    }

    pub async fn handle(
        &self,
        query: GetQuestionsQuery,
    ) -> Result<GetQuestionsResult, AssessmentError> {
        info!(user_id = %query.user_id, level = query.level, "Assessment questions requested");

        let level = open_level(self.access_checker.as_ref(), &query.user_id, query.level).await?;

        Ok(GetQuestionsResult {
            level,
            questions: self.bank.questions(level).to_vec(),
        })
    }
}
