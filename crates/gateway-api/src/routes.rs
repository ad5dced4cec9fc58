//! # Routes
//!
//! Axum router configuration for the payment gateway.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
///   - GET  / - Liveness text
///   - POST /create-payment-intent - Create a payment intent
///   - GET  /account - Retrieve the merchant account
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/create-payment-intent", post(handlers::create_payment_intent))
        .route("/account", get(handlers::get_account))
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
