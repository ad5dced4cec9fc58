//! # gateway-core
//!
//! Core types and traits for the stripe-gateway payment relay.
//!
//! This crate provides:
//! - `PaymentApi` trait for the remote payment provider
//! - `PaymentIntentRequest`, `PaymentIntent` and `Account` relay types
//! - `TransactionLog` and `CallTimer` for per-call metrics
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use gateway_core::{CallTimer, PaymentIntentRequest, TransactionLog};
//!
//! let request = PaymentIntentRequest::new(1000, "usd");
//! let timer = CallTimer::start();
//! let intent = api.create_payment_intent(&request).await?;
//! let metrics = TransactionLog::succeeded(&request, &intent, timer.finish());
//! ```

pub mod error;
pub mod intent;
pub mod metrics;
pub mod provider;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use intent::{Account, PaymentIntent, PaymentIntentRequest};
pub use metrics::{
    to_major_units, CallTimer, CallTiming, FailedTransactionLog, TransactionLog, FAILED_STATUS,
};
pub use provider::{PaymentApi, SharedPaymentApi};
