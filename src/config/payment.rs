//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::paypal::PayPalMode;

/// Payment configuration (PayPal)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// PayPal environment
    #[serde(default)]
    pub paypal_mode: PayPalMode,

    /// PayPal REST client ID
    pub paypal_client_id: String,

    /// PayPal REST client secret
    pub paypal_client_secret: SecretString,

    /// Base URL the approval flow returns the user to
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
}

impl PaymentConfig {
    /// Check if using the PayPal sandbox
    pub fn is_sandbox(&self) -> bool {
        self.paypal_mode == PayPalMode::Sandbox
    }

    /// Validate payment configuration
    ///
    /// Live mode is only allowed in production so that development and
    /// staging never move real money.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.paypal_client_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_ID"));
        }
        if self.paypal_client_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_SECRET"));
        }
        if !self.frontend_url.starts_with("http://") && !self.frontend_url.starts_with("https://") {
            return Err(ValidationError::InvalidFrontendUrl);
        }
        if self.paypal_mode == PayPalMode::Live && *environment != Environment::Production {
            return Err(ValidationError::LiveModeOutsideProduction);
        }
        Ok(())
    }
}

fn default_frontend_url() -> String {
    "http://localhost:3000".to_string()
}
