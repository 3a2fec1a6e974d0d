//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::ErrorResponse;
use crate::application::handlers::assessment::{
    GetFocusDomainsHandler, GetFocusDomainsQuery, GetHistoryHandler, GetHistoryQuery, GetProgressHandler, GetProgressQuery,
    GetQuestionsHandler, GetQuestionsQuery, GetReportHandler, GetReportQuery,
    SubmitAnswersCommand, SubmitAnswersHandler,
};
use crate::domain::assessment::{AssessmentError, QuestionBank};
use crate::domain::foundation::ErrorCode;
use crate::ports::{AccessChecker, AssessmentReader, AssessmentRepository, HistoryFilter};

use super::dto::{
    progress_response, FocusDomainResponse, FocusDomainsResponse, HistoryItemResponse, HistoryParams, QuestionResponse, QuestionsResponse,
    ReportResponse, SubmitAnswersRequest, SubmitAnswersResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for assessment routes.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub access_checker: Arc<dyn AccessChecker>,
    pub assessment_repository: Arc<dyn AssessmentRepository>,
    pub assessment_reader: Arc<dyn AssessmentReader>,
    pub question_bank: &'static QuestionBank,
}

impl AssessmentAppState {
    pub fn get_questions_handler(&self) -> GetQuestionsHandler {
        GetQuestionsHandler::new(self.access_checker.clone(), self.question_bank)
    }

    pub fn submit_answers_handler(&self) -> SubmitAnswersHandler {
        SubmitAnswersHandler::new(
            self.access_checker.clone(),
            self.assessment_repository.clone(),
            self.question_bank,
        )
    }

    pub fn get_report_handler(&self) -> GetReportHandler {
        GetReportHandler::new(self.assessment_reader.clone())
    }

    pub fn get_progress_handler(&self) -> GetProgressHandler {
        GetProgressHandler::new(self.assessment_reader.clone(), self.access_checker.clone())
    }

    pub fn get_history_handler(&self) -> GetHistoryHandler {
        GetHistoryHandler::new(self.assessment_reader.clone())
    }

    pub fn get_focus_domains_handler(&self) -> GetFocusDomainsHandler {
        GetFocusDomainsHandler::new(
            self.assessment_reader.clone(),
            self.assessment_repository.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /assessment/questions/:level - The level's twelve questions
pub async fn get_questions(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
    Path(level): Path<i64>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let result = state
        .get_questions_handler()
        .handle(GetQuestionsQuery {
            user_id: user.id,
            level,
        })
        .await?;

    Ok(Json(QuestionsResponse {
        level: result.level.number(),
        total_questions: result.questions.len(),
        questions: result.questions.iter().map(QuestionResponse::from).collect(),
    }))
}

/// GET /assessment/report - Cumulative scores and feedback
pub async fn get_report(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let report = state
        .get_report_handler()
        .handle(GetReportQuery { user_id: user.id })
        .await?;

    Ok(Json(ReportResponse::from(&report)))
}

/// GET /assessment/progress - Completion and unlock state per level
pub async fn get_progress(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let progress = state
        .get_progress_handler()
        .handle(GetProgressQuery {
            user_id: user.id,
            role: user.role,
        })
        .await?;

    Ok(Json(progress_response(&progress)))
}

/// GET /assessment/history?level=&domain= - Raw answer records
pub async fn get_history(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<HistoryParams>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let records = state
        .get_history_handler()
        .handle(GetHistoryQuery {
            user_id: user.id,
            filter: HistoryFilter {
                level: params.level,
                domain: params.domain,
            },
        })
        .await?;

    let items: Vec<HistoryItemResponse> = records.iter().map(HistoryItemResponse::from).collect();
    Ok(Json(items))
}

/// GET /assessment/recommendations - Weakest assessed domains
pub async fn get_recommendations(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let focus = state
        .get_focus_domains_handler()
        .handle(GetFocusDomainsQuery { user_id: user.id })
        .await?;

    Ok(Json(FocusDomainsResponse {
        focus_domains: focus.iter().map(FocusDomainResponse::from).collect(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /assessment/submit/:level - Submit a full answer set
pub async fn submit_answers(
    State(state): State<AssessmentAppState>,
    RequireAuth(user): RequireAuth,
    Path(level): Path<i64>,
    Json(request): Json<SubmitAnswersRequest>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let result = state
        .submit_answers_handler()
        .handle(SubmitAnswersCommand {
            user_id: user.id,
            level,
            answers: request.answers,
        })
        .await?;

    Ok(Json(SubmitAnswersResponse::completed(result.level.number())))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts assessment errors to HTTP responses.
#[derive(Debug)]
pub struct AssessmentApiError(AssessmentError);

impl From<AssessmentError> for AssessmentApiError {
    fn from(err: AssessmentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            AssessmentError::PaymentRequired { .. } => StatusCode::PAYMENT_REQUIRED,
            AssessmentError::LevelNotFound(_) | AssessmentError::NoAssessmentData => {
                StatusCode::NOT_FOUND
            }
            AssessmentError::AnswerCountMismatch { .. } | AssessmentError::InvalidAnswer { .. } => {
                StatusCode::BAD_REQUEST
            }
            AssessmentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let code = self.0.code().to_string();
        let body = match &self.0 {
            // Detail was logged where it happened; callers only see a generic failure.
            AssessmentError::Storage(_) => {
                ErrorResponse::new(
                    ErrorCode::InternalError.to_string(),
                    "Failed to process assessment request",
                )
            }
            AssessmentError::AnswerCountMismatch { expected, actual } => {
                ErrorResponse::with_details(
                    code,
                    self.0.message(),
                    serde_json::json!({ "expected": expected, "actual": actual }),
                )
            }
            AssessmentError::InvalidAnswer { index, value } => ErrorResponse::with_details(
                code,
                self.0.message(),
                serde_json::json!({ "index": index, "value": value }),
            ),
            _ => ErrorResponse::new(code, self.0.message()),
        };

        (status, Json(body)).into_response()
    }
}
