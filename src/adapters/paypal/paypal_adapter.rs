//! PayPal REST adapter.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PayPalConfig::new(PayPalMode::Sandbox, client_id, client_secret);
//! let gateway = PayPalGateway::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ExecutionOutcome, GatewayOrder, OrderRequest, PaymentGateway};

/// Which PayPal environment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPalMode {
    #[default]
    Sandbox,
    Live,
}

impl PayPalMode {
    pub fn base_url(&self) -> &'static str {
        match self {
            PayPalMode::Sandbox => "https://api-m.sandbox.paypal.com",
            PayPalMode::Live => "https://api-m.paypal.com",
        }
    }
}

/// PayPal API configuration.
#[derive(Clone)]
pub struct PayPalConfig {
    client_id: String,
    client_secret: SecretString,
    api_base_url: String,
}

impl PayPalConfig {
    pub fn new(mode: PayPalMode, client_id: impl Into<String>, client_secret: SecretString) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            api_base_url: mode.base_url().to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// PayPal gateway adapter.
pub struct PayPalGateway {
    config: PayPalConfig,
    http_client: reqwest::Client,
}

impl PayPalGateway {
    pub fn new(config: PayPalConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Exchanges client credentials for a bearer token.
    async fn access_token(&self) -> Result<String, DomainError> {
        let url = format!("{}/v1/oauth2/token", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.client_id,
                Some(self.config.client_secret.expose_secret()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| gateway_error(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, "PayPal rejected client credentials");
            return Err(gateway_error(format!("Token request returned {}", status)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| gateway_error(format!("Invalid token response: {}", e)))?;
        Ok(token.access_token)
    }
}

fn gateway_error(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::GatewayError, message)
}

fn payment_body(request: &OrderRequest) -> serde_json::Value {
    let level = request.service.level_number();
    let price = request.amount.to_string();
    let currency = request.currency.code();

    serde_json::json!({
        "intent": "sale",
        "payer": {"payment_method": "paypal"},
        "redirect_urls": {
            "return_url": request.return_url,
            "cancel_url": request.cancel_url,
        },
        "transactions": [{
            "item_list": {
                "items": [{
                    "name": format!("MindfulPath Level {}", level),
                    "sku": format!("L{}", level),
                    "price": price,
                    "currency": currency,
                    "quantity": 1,
                }]
            },
            "amount": {"total": price, "currency": currency},
            "description": request.service.description(),
        }]
    })
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct PaymentResponse {
    id: String,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    href: String,
    rel: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn reason(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "Payment failed".to_string())
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    fn name(&self) -> &'static str {
        "paypal"
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, DomainError> {
        let token = self.access_token().await?;
        let url = format!("{}/v1/payments/payment", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&payment_body(request))
            .send()
            .await
            .map_err(|e| gateway_error(format!("Payment creation failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let reason = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.reason())
                .unwrap_or_else(|_| "PayPal Error".to_string());
            tracing::error!(status = %status, reason = %reason, "PayPal payment creation failed");
            return Err(gateway_error(reason));
        }

        let payment: PaymentResponse = response
            .json()
            .await
            .map_err(|e| gateway_error(format!("Invalid payment response: {}", e)))?;

        let approval_url = payment
            .links
            .into_iter()
            .find(|l| l.rel == "approval_url")
            .map(|l| l.href)
            .ok_or_else(|| {
                tracing::error!(payment_id = %payment.id, "No approval_url in PayPal response");
                gateway_error("Could not get PayPal approval URL")
            })?;

        Ok(GatewayOrder {
            order_id: payment.id,
            approval_url,
        })
    }

    async fn execute_order(
        &self,
        order_id: &str,
        payer_id: &str,
    ) -> Result<ExecutionOutcome, DomainError> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/v1/payments/payment/{}/execute",
            self.config.api_base_url, order_id
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "payer_id": payer_id }))
            .send()
            .await
            .map_err(|e| gateway_error(format!("Payment execution failed: {}", e)))?;

        let status = response.status();
        if status.is_client_error() {
            let reason = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.reason())
                .unwrap_or_else(|_| "Payment failed".to_string());
            return Ok(ExecutionOutcome::Declined { reason });
        }
        if !status.is_success() {
            return Err(gateway_error(format!("Payment execution returned {}", status)));
        }

        let payment: PaymentResponse = response
            .json()
            .await
            .map_err(|e| gateway_error(format!("Invalid execution response: {}", e)))?;

        match payment.state.as_deref() {
            Some("approved") | Some("completed") | None => Ok(ExecutionOutcome::Captured),
            Some(other) => Ok(ExecutionOutcome::Declined {
                reason: format!("Payment state: {}", other),
            }),
        }
    }
}
