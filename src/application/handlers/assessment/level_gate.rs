//! Shared precondition for reading or submitting a level.

use tracing::warn;

use crate::domain::assessment::{AssessmentError, Level};
use crate::domain::foundation::UserId;
use crate::ports::{AccessChecker, AccessResult};

/// Checks payment access, then that the level exists.
///
/// The order matters: an unpaid request for a non-existent level is
/// reported as payment required, not as not found.
pub(super) async fn open_level(
    access_checker: &dyn AccessChecker,
    user_id: &UserId,
    level: i64,
) -> Result<Level, AssessmentError> {
    match access_checker.can_access_level(user_id, level).await? {
        AccessResult::Allowed => {}
        AccessResult::Denied(reason) => {
            warn!(user_id = %user_id, level, %reason, "Level access denied");
            return Err(AssessmentError::payment_required(level));
        }
    }

    Level::from_number(level).ok_or_else(|| AssessmentError::level_not_found(level))
}
