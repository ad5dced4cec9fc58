//! # Gateway Error Types
//!
//! Typed error handling for the payment gateway.
//! All remote payment operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for all gateway operations.
///
/// The `Display` output of the request-time variants is the bare message, so
/// whatever the remote API (or the request decoder) said is what the caller
/// sees in the `error` field of the response body.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing keys, invalid bind address)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request body could not be decoded
    #[error("{0}")]
    InvalidRequest(String),

    /// Payment provider rejected the call
    #[error("{message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("{0}")]
    Network(String),

    /// Provider response could not be parsed
    #[error("{0}")]
    Serialization(String),
}

impl GatewayError {
    /// Build a provider error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        GatewayError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable name of the variant, for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Configuration(_) => "configuration",
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::Provider { .. } => "provider",
            GatewayError::Network(_) => "network",
            GatewayError::Serialization(_) => "serialization",
        }
    }

    /// Returns the HTTP status code for this error.
    ///
    /// Every failure surfaces as 500, client-caused ones included. Callers
    /// rely on that contract, so the variant only shows up in the logs.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Configuration(_)
            | GatewayError::InvalidRequest(_)
            | GatewayError::Provider { .. }
            | GatewayError::Network(_)
            | GatewayError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
