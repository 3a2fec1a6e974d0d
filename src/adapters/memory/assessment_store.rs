//! In-memory assessment record store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::assessment::{AssessmentRecord, AssessmentSubmission, Level, TrackingEvent};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{AssessmentReader, AssessmentRepository, HistoryFilter};

#[derive(Default)]
struct State {
    records: Vec<AssessmentRecord>,
    events: Vec<TrackingEvent>,
}

/// Records and tracking events held behind a single lock.
///
/// A submission is staged in full before the lock is taken for the
/// commit, so readers never see part of one.
#[derive(Default)]
pub struct InMemoryAssessmentStore {
    state: RwLock<State>,
    /// Fail a save after staging this many records. Event writes fail too.
    fail_after: Option<usize>,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saves fail part-way through staging.
    pub fn failing_after(records: usize) -> Self {
        Self {
            state: RwLock::new(State::default()),
            fail_after: Some(records),
        }
    }

    /// Number of committed records across all users.
    pub async fn record_count(&self) -> usize {
        self.state.read().await.records.len()
    }

    /// Committed tracking events across all users.
    pub async fn tracking_events(&self) -> Vec<TrackingEvent> {
        self.state.read().await.events.clone()
    }
}

fn matches_filter(record: &AssessmentRecord, filter: &HistoryFilter) -> bool {
    let level_ok = filter.level.map_or(true, |l| record.level.number() == l);
    let domain_ok = filter
        .domain
        .as_deref()
        .map_or(true, |d| record.domain.name() == d);
    level_ok && domain_ok
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentStore {
    async fn save_submission(&self, submission: &AssessmentSubmission) -> Result<(), DomainError> {
        let mut staged = Vec::with_capacity(submission.records.len());
        for record in &submission.records {
            if self.fail_after == Some(staged.len()) {
                return Err(DomainError::database(format!(
                    "Simulated failure after {} records",
                    staged.len()
                )));
            }
            staged.push(record.clone());
        }

        let mut state = self.state.write().await;
        state.records.extend(staged);
        state.events.push(submission.event.clone());
        Ok(())
    }

    async fn record_event(&self, event: &TrackingEvent) -> Result<(), DomainError> {
        if self.fail_after.is_some() {
            return Err(DomainError::database("Simulated event write failure"));
        }
        self.state.write().await.events.push(event.clone());
        Ok(())
    }
}

#[async_trait]
impl AssessmentReader for InMemoryAssessmentStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError> {
        self.history(user_id, &HistoryFilter::default()).await
    }

    async fn history(
        &self,
        user_id: &UserId,
        filter: &HistoryFilter,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        let state = self.state.read().await;
        let mut records: Vec<AssessmentRecord> = state
            .records
            .iter()
            .filter(|r| &r.user_id == user_id && matches_filter(r, filter))
            .cloned()
            .collect();
        records.sort_by_key(|r| r.completed_at);
        Ok(records)
    }

    async fn count_by_level(&self, user_id: &UserId, level: Level) -> Result<u32, DomainError> {
        let state = self.state.read().await;
        let count = state
            .records
            .iter()
            .filter(|r| &r.user_id == user_id && r.level == level)
            .count();
        Ok(count as u32)
    }
}
