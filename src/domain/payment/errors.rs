//! Payment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPricing | 400 |
//! | AlreadyPurchased | 400 |
//! | NotFound | 404 |
//! | Declined | 400 |
//! | InvalidState | 409 |
//! | Gateway | 502 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode};

/// Payment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// No price exists for the requested level and currency.
    InvalidPricing { level: u32, currency: String },

    /// A completed payment for this service already exists.
    AlreadyPurchased { level: u32 },

    /// No matching payment record for this user.
    NotFound(String),

    /// The gateway refused to capture the payment.
    Declined { reason: String },

    /// Invalid state for the requested operation.
    InvalidState { current: String, attempted: String },

    /// The gateway could not be reached or answered unexpectedly.
    Gateway(String),

    /// Infrastructure error.
    Infrastructure(String),
}

impl PaymentError {
    pub fn invalid_pricing(level: u32, currency: impl Into<String>) -> Self {
        PaymentError::InvalidPricing {
            level,
            currency: currency.into(),
        }
    }

    pub fn already_purchased(level: u32) -> Self {
        PaymentError::AlreadyPurchased { level }
    }

    pub fn not_found(reference: impl Into<String>) -> Self {
        PaymentError::NotFound(reference.into())
    }

    pub fn declined(reason: impl Into<String>) -> Self {
        PaymentError::Declined {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        PaymentError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        PaymentError::Gateway(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PaymentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::InvalidPricing { .. } => ErrorCode::InvalidPricing,
            PaymentError::AlreadyPurchased { .. } => ErrorCode::AlreadyPurchased,
            PaymentError::NotFound(_) => ErrorCode::PaymentNotFound,
            PaymentError::Declined { .. } => ErrorCode::PaymentFailed,
            PaymentError::InvalidState { .. } => ErrorCode::ValidationFailed,
            PaymentError::Gateway(_) => ErrorCode::GatewayError,
            PaymentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PaymentError::InvalidPricing { .. } => {
                "Invalid level or currency combination".to_string()
            }
            PaymentError::AlreadyPurchased { level } => {
                format!("Level {} already purchased", level)
            }
            PaymentError::NotFound(_) => {
                "Payment record not found or already processed.".to_string()
            }
            PaymentError::Declined { reason } => format!("Payment failed: {}", reason),
            PaymentError::InvalidState { current, attempted } => {
                format!("Cannot {} payment in {} state", attempted, current)
            }
            PaymentError::Gateway(msg) => format!("Payment gateway error: {}", msg),
            PaymentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PaymentError {}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::GatewayError | ErrorCode::PaymentFailed => {
                PaymentError::Gateway(err.message)
            }
            _ => PaymentError::Infrastructure(err.message),
        }
    }
}
