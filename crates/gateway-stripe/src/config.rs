//! # Stripe Configuration
//!
//! Configuration management for the Stripe client.
//! The secret key is loaded from the environment.

use gateway_core::GatewayError;
use std::env;
use std::time::Duration;

/// Production Stripe API origin
pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// Stripe API version sent with every request
pub const DEFAULT_API_VERSION: &str = "2024-12-18.acacia";

/// Per-request timeout, matching the official SDKs
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_..., sk_live_..., or a restricted rk_ key)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,

    /// Request timeout
    pub timeout: Duration,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_API_KEY`
    ///
    /// Optional:
    /// - `STRIPE_API_BASE_URL` (defaults to `https://api.stripe.com`)
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("STRIPE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GatewayError::Configuration("STRIPE_API_KEY not set".to_string()))?;

        let mut config = Self::new(secret_key);
        if let Some(url) = lookup("STRIPE_API_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config = config.with_api_base_url(url);
        }

        Ok(config)
    }

    /// Create config with an explicit key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_") || self.secret_key.starts_with("rk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_") || self.secret_key.starts_with("rk_live_")
    }

    /// Mode label for startup logging; never exposes the key itself
    pub fn mode(&self) -> &'static str {
        if self.is_test_mode() {
            "test"
        } else if self.is_live_mode() {
            "live"
        } else {
            "unknown"
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_key_modes() {
        assert_eq!(StripeConfig::new("sk_test_abc123").mode(), "test");
        assert_eq!(StripeConfig::new("sk_live_abc123").mode(), "live");
        assert_eq!(StripeConfig::new("rk_test_abc123").mode(), "test");
        assert_eq!(StripeConfig::new("not-a-key").mode(), "unknown");
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    #[test]
    fn test_missing_key() {
        let result = StripeConfig::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn test_empty_key_is_missing() {
        let result = StripeConfig::from_lookup(lookup(&[("STRIPE_API_KEY", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = StripeConfig::from_lookup(lookup(&[
            ("STRIPE_API_KEY", "sk_test_abc"),
            ("STRIPE_API_BASE_URL", "http://127.0.0.1:12111/"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:12111");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", StripeConfig::new("sk_live_supersecret"));
        assert!(!rendered.contains("supersecret"));
    }
}
