//! Request and response DTOs for assessment endpoints.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::FocusDomain;
use crate::domain::assessment::{
    AssessmentProgress, AssessmentRecord, AssessmentReport, DomainReport, LevelProgress,
    LifeDomain, Question, StageFeedback,
};
use crate::domain::payment::PriceTable;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /submit/:level`: answer letters keyed by question index.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    pub answers: HashMap<String, String>,
}

/// Query string of `GET /history`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub level: Option<u32>,
    pub domain: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub index: usize,
    pub domain: &'static str,
    pub question: &'static str,
    pub question_de: &'static str,
    pub question_fr: &'static str,
}

impl From<&Question> for QuestionResponse {
    fn from(q: &Question) -> Self {
        Self {
            index: q.index,
            domain: q.domain.name(),
            question: q.text.en,
            question_de: q.text.de,
            question_fr: q.text.fr,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub level: u32,
    pub total_questions: usize,
    pub questions: Vec<QuestionResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswersResponse {
    pub message: String,
    pub level: u32,
    pub status: &'static str,
}

impl SubmitAnswersResponse {
    pub fn completed(level: u32) -> Self {
        Self {
            message: format!("Level {} assessment submitted successfully", level),
            level,
            status: "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainFeedbackResponse {
    pub score: i64,
    pub label: &'static str,
    pub title: &'static str,
    pub feedback: &'static str,
    pub recommendations: &'static str,
}

impl From<&DomainReport> for DomainFeedbackResponse {
    fn from(report: &DomainReport) -> Self {
        Self {
            score: report.score,
            label: report.feedback.band.as_str(),
            title: report.feedback.title,
            feedback: report.feedback.general,
            recommendations: report.feedback.recommendations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallStageResponse {
    pub stage: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub focus_areas: &'static str,
    pub recommendation: &'static str,
}

impl From<&StageFeedback> for OverallStageResponse {
    fn from(stage: &StageFeedback) -> Self {
        Self {
            stage: stage.stage.as_str(),
            title: stage.title,
            description: stage.description,
            focus_areas: stage.focus_areas,
            recommendation: stage.recommendation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub user_id: String,
    pub report_generated_at: String,
    pub completed_levels: Vec<u32>,
    pub overall_score: i64,
    pub overall_stage: OverallStageResponse,
    /// Keyed by domain display name, in presentation order.
    pub domain_scores: BTreeMap<LifeDomain, i64>,
    pub domain_feedback: BTreeMap<LifeDomain, DomainFeedbackResponse>,
    pub is_complete: bool,
}

impl From<&AssessmentReport> for ReportResponse {
    fn from(report: &AssessmentReport) -> Self {
        Self {
            user_id: report.user_id.to_string(),
            report_generated_at: report.generated_at.to_rfc3339(),
            completed_levels: report.completed_levels.iter().map(|l| l.number()).collect(),
            overall_score: report.overall_score,
            overall_stage: OverallStageResponse::from(report.overall_stage),
            domain_scores: report.domain_scores.iter().collect(),
            domain_feedback: report
                .domain_feedback
                .iter()
                .map(|(domain, r)| (*domain, DomainFeedbackResponse::from(r)))
                .collect(),
            is_complete: report.is_complete,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FocusDomainResponse {
    pub domain: &'static str,
    pub score: i64,
    pub label: &'static str,
}

impl From<&FocusDomain> for FocusDomainResponse {
    fn from(f: &FocusDomain) -> Self {
        Self {
            domain: f.domain.name(),
            score: f.score,
            label: f.band.as_str(),
        }
    }
}

/// Body of `GET /recommendations`, weakest domain first.
#[derive(Debug, Clone, Serialize)]
pub struct FocusDomainsResponse {
    pub focus_domains: Vec<FocusDomainResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelProgressResponse {
    pub level: u32,
    pub completed: bool,
    pub questions_answered: u32,
    pub unlocked: bool,
    pub price: PriceTable,
}

impl From<&LevelProgress> for LevelProgressResponse {
    fn from(p: &LevelProgress) -> Self {
        Self {
            level: p.level.number(),
            completed: p.completed,
            questions_answered: p.questions_answered,
            unlocked: p.unlocked,
            price: p.price,
        }
    }
}

/// Progress keyed `level_1`, `level_2`, `level_3`.
pub fn progress_response(progress: &AssessmentProgress) -> BTreeMap<String, LevelProgressResponse> {
    progress
        .levels
        .iter()
        .map(|p| (format!("level_{}", p.level.number()), LevelProgressResponse::from(p)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryItemResponse {
    pub id: String,
    pub user_id: String,
    pub level: u32,
    pub domain: &'static str,
    pub domain_score: i64,
    pub answer: &'static str,
    pub question_text: String,
    pub completed_at: String,
}

impl From<&AssessmentRecord> for HistoryItemResponse {
    fn from(r: &AssessmentRecord) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id.to_string(),
            level: r.level.number(),
            domain: r.domain.name(),
            domain_score: r.points,
            answer: r.answer.as_str(),
            question_text: r.question_text.clone(),
            completed_at: r.completed_at.to_rfc3339(),
        }
    }
}
