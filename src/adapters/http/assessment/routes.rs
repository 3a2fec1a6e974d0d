//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_history, get_progress, get_questions, get_recommendations, get_report, submit_answers,
    AssessmentAppState,
};

/// Create the assessment API router.
///
/// # Routes (all require authentication)
/// - `GET /questions/:level` - Questions of a level
/// - `POST /submit/:level` - Submit twelve answers
/// - `GET /report` - Cumulative report
/// - `GET /progress` - Per-level progress
/// - `GET /history` - Raw answer history
/// - `GET /recommendations` - Weakest assessed domains
pub fn assessment_routes() -> Router<AssessmentAppState> {
    Router::new()
        .route("/questions/:level", get(get_questions))
        .route("/submit/:level", post(submit_answers))
        .route("/report", get(get_report))
        .route("/progress", get(get_progress))
        .route("/history", get(get_history))
        .route("/recommendations", get(get_recommendations))
}

/// Create the assessment module router, mounted under `/assessment`.
pub fn assessment_router() -> Router<AssessmentAppState> {
    Router::new().nest("/assessment", assessment_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::access::PaymentAccessChecker;
    use crate::adapters::memory::{InMemoryAssessmentStore, InMemoryPaymentStore};
    use crate::domain::assessment::QuestionBank;

    fn test_state() -> AssessmentAppState {
        let store = Arc::new(InMemoryAssessmentStore::new());
        AssessmentAppState {
            access_checker: Arc::new(PaymentAccessChecker::new(Arc::new(
                InMemoryPaymentStore::new(),
            ))),
            assessment_repository: store.clone(),
            assessment_reader: store,
            question_bank: QuestionBank::standard().unwrap(),
        }
    }

    #[test]
    fn assessment_router_creates_router() {
        let _: Router<()> = assessment_router().with_state(test_state());
    }
}
