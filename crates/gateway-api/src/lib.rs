//! # gateway-api
//!
//! HTTP API layer for stripe-gateway.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Liveness text |
//! | POST | `/create-payment-intent` | Create a payment intent |
//! | GET | `/account` | Retrieve the merchant account |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, LogFormat};
