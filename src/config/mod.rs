//! Application configuration module
//!
//! Configuration is read from environment variables with the `MINDFUL_PATH`
//! prefix, using `__` (double underscore) between nested sections. A `.env`
//! file is honoured in development.
//!
//! # Example
//!
//! ```no_run
//! use mindful_path::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod payment;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Session token verification
    pub auth: AuthConfig,

    /// Payment gateway (PayPal)
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `MINDFUL_PATH__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MINDFUL_PATH__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MINDFUL_PATH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.payment.validate(&self.server.environment)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::PayPalMode;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "MINDFUL_PATH__DATABASE__URL",
        "MINDFUL_PATH__AUTH__JWT_SECRET",
        "MINDFUL_PATH__PAYMENT__PAYPAL_CLIENT_ID",
        "MINDFUL_PATH__PAYMENT__PAYPAL_CLIENT_SECRET",
        "MINDFUL_PATH__PAYMENT__PAYPAL_MODE",
        "MINDFUL_PATH__SERVER__PORT",
        "MINDFUL_PATH__SERVER__ENVIRONMENT",
    ];

    fn set_minimal_env() {
        env::set_var("MINDFUL_PATH__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var(
            "MINDFUL_PATH__AUTH__JWT_SECRET",
            "0123456789abcdef0123456789abcdef",
        );
        env::set_var("MINDFUL_PATH__PAYMENT__PAYPAL_CLIENT_ID", "client-id");
        env::set_var("MINDFUL_PATH__PAYMENT__PAYPAL_CLIENT_SECRET", "client-secret");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        set_minimal_env();
        for (key, value) in extra {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn loads_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).expect("config should load");

        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.payment.paypal_client_id, "client-id");
        assert_eq!(config.payment.paypal_mode, PayPalMode::Sandbox);
        assert!(config.auth.issuer.is_none());
    }

    #[test]
    fn minimal_config_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_section_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn overrides_are_applied() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("MINDFUL_PATH__SERVER__PORT", "3000"),
            ("MINDFUL_PATH__SERVER__ENVIRONMENT", "production"),
            ("MINDFUL_PATH__PAYMENT__PAYPAL_MODE", "live"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.server.is_production());
        assert_eq!(config.payment.paypal_mode, PayPalMode::Live);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn live_mode_in_development_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("MINDFUL_PATH__PAYMENT__PAYPAL_MODE", "live")]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::LiveModeOutsideProduction)
        ));
    }

    #[test]
    fn missing_database_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::remove_var("MINDFUL_PATH__DATABASE__URL");
        let result = AppConfig::load();
        clear_env();
        assert!(result.is_err());
    }
}
