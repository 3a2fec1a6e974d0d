//! GetReportHandler - Query handler for the cumulative assessment report.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{AssessmentError, AssessmentReport};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::AssessmentReader;

#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub user_id: UserId,
}

/// Rebuilds the report from the user's full history on every call.
pub struct GetReportHandler {
    reader: Arc<dyn AssessmentReader>,
}

impl GetReportHandler {
    pub fn new(reader: Arc<dyn AssessmentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetReportQuery) -> Result<AssessmentReport, AssessmentError> {
        info!(user_id = %query.user_id, "Assessment report requested");

        let records = self.reader.find_by_user(&query.user_id).await?;
        let report = AssessmentReport::build(query.user_id, &records, Timestamp::now())?;

        info!(
            user_id = %report.user_id,
            overall_score = report.overall_score,
            stage = %report.overall_stage.stage,
            "Assessment report generated"
        );
        Ok(report)
    }
}
