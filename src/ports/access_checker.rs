//! Access control port for payment-gated assessment levels.
//!
//! Question retrieval and submission ask this port before doing anything
//! else. The progress view also consults it, but only to report an
//! `unlocked` flag.
//!
//! # Design
//!
//! The check is **fail-secure**: a lookup error is an error, never an
//! implicit grant. Results are not cached, since a payment can complete
//! between two requests.
//!
//! # Example
//!
//! ```ignore
//! use mindful_path::ports::{AccessChecker, AccessResult};
//!
//! match access_checker.can_access_level(&user_id, 2).await? {
//!     AccessResult::Allowed => { /* serve questions */ }
//!     AccessResult::Denied(reason) => return Err(reason.into()),
//! }
//! ```

use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for checking whether a user may open an assessment level.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Check if the user may read or submit the given level.
    ///
    /// Takes the raw requested number so that access is decided before
    /// the level is known to exist: level 1 is always open, any other
    /// number needs a completed `level_{N}` payment.
    async fn can_access_level(&self, user_id: &UserId, level: i64)
        -> Result<AccessResult, DomainError>;
}

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessResult {
    /// Access is granted.
    Allowed,
    /// Access is denied with a specific reason.
    Denied(AccessDeniedReason),
}

impl AccessResult {
    /// Returns true if access is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    /// Returns true if access is denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessResult::Denied(_))
    }

    /// Converts the result to a Result type, with denied becoming an error.
    pub fn into_result(self) -> Result<(), AccessDeniedReason> {
        match self {
            AccessResult::Allowed => Ok(()),
            AccessResult::Denied(reason) => Err(reason),
        }
    }
}

/// Reason why access was denied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDeniedReason {
    /// No completed payment exists for the level.
    PaymentRequired {
        /// Level that was requested.
        level: i64,
    },
}

impl AccessDeniedReason {
    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> String {
        match self {
            AccessDeniedReason::PaymentRequired { level } => format!(
                "Level {} requires payment. Please complete payment first.",
                level
            ),
        }
    }
}

impl std::fmt::Display for AccessDeniedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_checker_is_object_safe() {
        fn _accepts_dyn(_checker: &dyn AccessChecker) {}
    }

    #[test]
    fn allowed_converts_to_ok() {
        assert!(AccessResult::Allowed.is_allowed());
        assert_eq!(AccessResult::Allowed.into_result(), Ok(()));
    }

    #[test]
    fn denied_converts_to_reason() {
        let result = AccessResult::Denied(AccessDeniedReason::PaymentRequired { level: 2 });
        assert!(result.is_denied());
        assert_eq!(
            result.into_result(),
            Err(AccessDeniedReason::PaymentRequired { level: 2 })
        );
    }

    #[test]
    fn payment_required_message_names_level() {
        let reason = AccessDeniedReason::PaymentRequired { level: 3 };
        assert_eq!(
            reason.to_string(),
            "Level 3 requires payment. Please complete payment first."
        );
    }

    #[test]
    fn reason_serializes_tagged() {
        let json = serde_json::to_value(AccessDeniedReason::PaymentRequired { level: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "payment_required", "level": 2}));
    }
}
