//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the server configuration and the single payment API handle,
//! constructed once at startup and injected into the router.

use gateway_core::SharedPaymentApi;
use gateway_stripe::StripeClient;
use std::sync::Arc;

/// Port used when `PORT` is unset, empty or not a valid port number
pub const DEFAULT_PORT: u16 = 3000;

/// Host used when `HOST` is unset
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            log_format: lookup("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(LogFormat::Text),
        }
    }

    /// Address string to bind to (`host:port`)
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::Text,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Remote payment API client
    pub payments: SharedPaymentApi,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state around an already constructed payment API
    pub fn new(config: AppConfig, payments: SharedPaymentApi) -> Self {
        Self { payments, config }
    }

    /// Create state backed by the Stripe client configured from the environment
    pub fn with_stripe(config: AppConfig) -> anyhow::Result<Self> {
        let stripe = StripeClient::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?;

        tracing::info!(
            "Stripe client ready: mode={}, api={}",
            stripe.config().mode(),
            stripe.config().api_base_url
        );

        Ok(Self::new(config, Arc::new(stripe)))
    }
}
