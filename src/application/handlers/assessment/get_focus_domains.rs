//! GetFocusDomainsHandler - Query handler for the weakest assessed domains.
//!
//! Viewing the focus domains is itself recorded as a tracking event, so
//! this query writes one row.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::assessment::{
    AssessmentError, DomainBand, DomainScores, LifeDomain, TrackingEvent,
};
use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{AssessmentReader, AssessmentRepository};

/// How many domains a user is pointed at.
pub const FOCUS_DOMAIN_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct GetFocusDomainsQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusDomain {
    pub domain: LifeDomain,
    pub score: i64,
    pub band: DomainBand,
}

pub struct GetFocusDomainsHandler {
    reader: Arc<dyn AssessmentReader>,
    repository: Arc<dyn AssessmentRepository>,
}

impl GetFocusDomainsHandler {
    pub fn new(
        reader: Arc<dyn AssessmentReader>,
        repository: Arc<dyn AssessmentRepository>,
    ) -> Self {
        Self { reader, repository }
    }

    /// Lowest-scoring assessed domains, weakest first.
    pub async fn handle(
        &self,
        query: GetFocusDomainsQuery,
    ) -> Result<Vec<FocusDomain>, AssessmentError> {
        info!(user_id = %query.user_id, "Focus domains requested");

        let records = self.reader.find_by_user(&query.user_id).await?;
        let scores = DomainScores::from_records(&records);
        if scores.is_empty() {
            return Err(AssessmentError::NoAssessmentData);
        }

        let focus: Vec<FocusDomain> = scores
            .lowest_assessed(FOCUS_DOMAIN_COUNT)
            .into_iter()
            .map(|(domain, score)| FocusDomain {
                domain,
                score,
                band: DomainBand::for_score(score),
            })
            .collect();

        let domains: Vec<LifeDomain> = focus.iter().map(|f| f.domain).collect();
        let event = TrackingEvent::recommendations_viewed(
            query.user_id.clone(),
            &domains,
            Timestamp::now(),
        );
        self.repository.record_event(&event).await.map_err(|e| {
            error!(user_id = %query.user_id, error = %e, "Failed to record focus domain view");
            AssessmentError::from(e)
        })?;

        Ok(focus)
    }
}
