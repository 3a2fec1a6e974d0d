//! Assessment reader port (read side).
//!
//! Provides the raw record history that scores are recomputed from.

use crate::domain::assessment::{AssessmentRecord, Level};
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Optional filters for the history listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Only records of this level number.
    pub level: Option<u32>,
    /// Only records whose domain has exactly this display name.
    pub domain: Option<String>,
}

/// Reader port for assessment history.
#[async_trait]
pub trait AssessmentReader: Send + Sync {
    /// Every record of the user, oldest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<AssessmentRecord>, DomainError>;

    /// Records of the user matching the filter, oldest first.
    async fn history(
        &self,
        user_id: &UserId,
        filter: &HistoryFilter,
    ) -> Result<Vec<AssessmentRecord>, DomainError>;

    /// Number of records the user has for one level.
    async fn count_by_level(&self, user_id: &UserId, level: Level) -> Result<u32, DomainError>;
}
