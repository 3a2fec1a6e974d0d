//! Assessment repository port (write side).
//!
//! Records and tracking events are append-only. Nothing here updates or
//! deletes them.

use crate::domain::assessment::{AssessmentSubmission, TrackingEvent};
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Repository port for persisting assessment submissions.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Persist all records of a submission together with its tracking event.
    ///
    /// All-or-nothing: on error, none of the records and not the event
    /// may be visible to any reader.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save_submission(&self, submission: &AssessmentSubmission) -> Result<(), DomainError>;

    /// Persist a standalone activity event.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn record_event(&self, event: &TrackingEvent) -> Result<(), DomainError>;
}
