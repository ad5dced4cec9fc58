//! # Stripe Gateway
//!
//! Thin HTTP relay in front of the Stripe API.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_API_KEY=sk_test_...
//! export PORT=3000
//!
//! # Run the server
//! stripe-gateway
//! ```

use gateway_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present, before any config reads the environment
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    init_tracing(config.log_format);

    // Initialize application state
    let state = AppState::with_stripe(config)?;
    let bind_address = state.config.bind_address();
    let port = state.config.port;

    // Create router
    let app = routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);
    info!("Server is running on http://localhost:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}
