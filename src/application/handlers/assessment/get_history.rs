//! GetHistoryHandler - Query handler for raw answer history.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::{AssessmentError, AssessmentRecord};
use crate::domain::foundation::UserId;
use crate::ports::{AssessmentReader, HistoryFilter};

#[derive(Debug, Clone)]
pub struct GetHistoryQuery {
    pub user_id: UserId,
    pub filter: HistoryFilter,
}

pub struct GetHistoryHandler {
    reader: Arc<dyn AssessmentReader>,
}

impl GetHistoryHandler {
    pub fn new(reader: Arc<dyn AssessmentReader>) -> Self {
        Self { reader }
    }

    /// Records oldest first. A level of 0 or an empty domain means no filter.
    pub async fn handle(
        &self,
        query: GetHistoryQuery,
    ) -> Result<Vec<AssessmentRecord>, AssessmentError> {
        info!(user_id = %query.user_id, "Assessment history requested");

        let filter = HistoryFilter {
            level: query.filter.level.filter(|l| *l != 0),
            domain: query.filter.domain.filter(|d| !d.is_empty()),
        };

        Ok(self.reader.history(&query.user_id, &filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentStore;
    use crate::domain::assessment::{Level, QuestionBank, ScoringEngine};
    use crate::domain::foundation::Timestamp;
    use crate::ports::AssessmentRepository;
    use std::collections::HashMap;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    async fn store_with_two_levels() -> Arc<InMemoryAssessmentStore> {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let engine = ScoringEngine::new(QuestionBank::standard().unwrap());
        for level in [Level::One, Level::Two] {
            let answers: HashMap<String, String> =
                (0..12).map(|i| (i.to_string(), "B".to_string())).collect();
            let submission = engine
                .score_submission(&user(), level, &answers, Timestamp::now())
                .unwrap();
            store.save_submission(&submission).await.unwrap();
        }
        store
    }

    fn query(level: Option<u32>, domain: Option<&str>) -> GetHistoryQuery {
        GetHistoryQuery {
            user_id: user(),
            filter: HistoryFilter {
                level,
                domain: domain.map(str::to_string),
            },
        }
    }

    #[tokio::test]
    async fn unfiltered_history_is_ordered_by_completion() {
        let handler = GetHistoryHandler::new(store_with_two_levels().await);
        let records = handler.handle(query(None, None)).await.unwrap();

        assert_eq!(records.len(), 24);
        assert!(records.windows(2).all(|w| !w[1].completed_at.is_before(&w[0].completed_at)));
    }

    #[tokio::test]
    async fn level_and_domain_filters_combine() {
        let handler = GetHistoryHandler::new(store_with_two_levels().await);
        let records = handler
            .handle(query(Some(2), Some("Personal Growth")))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Two);
    }

    #[tokio::test]
    async fn zero_level_and_empty_domain_are_ignored() {
        let handler = GetHistoryHandler::new(store_with_two_levels().await);
        let records = handler.handle(query(Some(0), Some(""))).await.unwrap();
        assert_eq!(records.len(), 24);
    }

    #[tokio::test]
    async fn unknown_domain_yields_empty_list() {
        let handler = GetHistoryHandler::new(store_with_two_levels().await);
        let records = handler.handle(query(None, Some("Astrology"))).await.unwrap();
        assert!(records.is_empty());
    }
}
