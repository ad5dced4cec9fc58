//! # gateway-stripe
//!
//! Stripe client for the stripe-gateway payment relay.
//!
//! `StripeClient` implements `gateway_core::PaymentApi` against the Stripe
//! REST API:
//!
//! - `POST /v1/payment_intents` for payment intent creation
//! - `GET /v1/account` for the merchant account
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gateway_core::{PaymentApi, PaymentIntentRequest};
//! use gateway_stripe::StripeClient;
//!
//! // Reads STRIPE_API_KEY
//! let stripe = StripeClient::from_env()?;
//!
//! let intent = stripe
//!     .create_payment_intent(&PaymentIntentRequest::new(1000, "usd"))
//!     .await?;
//!
//! // Hand intent.client_secret to the browser
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::StripeClient;
pub use config::StripeConfig;
