//! # Payment API Trait
//!
//! The seam between the HTTP layer and the remote payment provider.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             PaymentApi (trait)              │
//! │  ├── create_payment_intent()                │
//! │  ├── retrieve_account()                     │
//! │  └── provider_name()                        │
//! └─────────────────────────────────────────────┘
//!                       ▲
//!          ┌────────────┴────────────┐
//!  ┌───────┴───────┐         ┌───────┴───────┐
//!  │ StripeClient  │         │  test stubs   │
//!  └───────────────┘         └───────────────┘
//! ```

use crate::error::GatewayResult;
use crate::intent::{Account, PaymentIntent, PaymentIntentRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote payment operations the gateway relays.
///
/// Implementations own their transport (connection pooling, timeouts) and
/// must be safe to share across concurrent requests.
#[async_trait]
pub trait PaymentApi: Send + Sync {
    /// Create a payment intent for the given amount and currency.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> GatewayResult<PaymentIntent>;

    /// Retrieve the account the credentials belong to.
    async fn retrieve_account(&self) -> GatewayResult<Account>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment API handle (dynamic dispatch)
pub type SharedPaymentApi = Arc<dyn PaymentApi>;
