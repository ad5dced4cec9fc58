//! # Stripe Client
//!
//! Implementation of `PaymentApi` over the Stripe REST API.
//! Payment intents are created with form-encoded bodies; the account is
//! fetched and relayed without interpretation.

use crate::config::StripeConfig;
use async_trait::async_trait;
use gateway_core::{
    Account, GatewayError, GatewayResult, PaymentApi, PaymentIntent, PaymentIntentRequest,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, instrument};

const PROVIDER: &str = "stripe";

/// Render a caller-supplied JSON value as a form field.
///
/// Scalars go over as their text; `null` means the field is omitted. Nested
/// values are sent as JSON text and left for Stripe to reject.
fn form_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Stripe API client.
///
/// Cheap to share behind an `Arc`; reqwest pools connections internally.
pub struct StripeClient {
    config: StripeConfig,
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(config: StripeConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                GatewayError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = StripeConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
    }

    /// Send a request and decode a successful JSON body, mapping Stripe's
    /// error envelope to a provider error
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> GatewayResult<T> {
        let response = self
            .authorize(builder)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                debug!(
                    "Stripe error detail: type={:?}, code={:?}, param={:?}",
                    error_response.error.error_type,
                    error_response.error.code,
                    error_response.error.param
                );
                return Err(GatewayError::provider(PROVIDER, error_response.error.message));
            }

            return Err(GatewayError::provider(
                PROVIDER,
                format!("HTTP {}: {}", status, body),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentApi for StripeClient {
    #[instrument(skip(self, request), fields(amount = ?request.amount, currency = ?request.currency))]
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> GatewayResult<PaymentIntent> {
        debug!("Creating Stripe payment intent");

        let form_params: Vec<(&str, String)> = [
            ("amount", request.amount.as_ref()),
            ("currency", request.currency.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.and_then(form_value).map(|v| (name, v)))
        .collect();

        let builder = self
            .client
            .post(self.url("/v1/payment_intents"))
            .form(&form_params);

        let intent: PaymentIntent = self.execute(builder).await?;
        debug!("Created Stripe payment intent: id={}, status={}", intent.id, intent.status);

        Ok(intent)
    }

    #[instrument(skip(self))]
    async fn retrieve_account(&self) -> GatewayResult<Account> {
        debug!("Retrieving Stripe account");

        let builder = self.client.get(self.url("/v1/account"));
        let account: Account = self.execute(builder).await?;

        debug!("Retrieved Stripe account: id={:?}", account.id());
        Ok(account)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    param: Option<String>,
}
