//! # PayFast Redirect
//!
//! Turns a payment request into a signed PayFast hosted-page URL.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export PAYFAST_MERCHANT_ID=10000100
//! export PAYFAST_MERCHANT_KEY=46f0cd694581a
//! export PAYFAST_PASSPHRASE=jt7NOE43FZPn
//!
//! # Run the server
//! payfast-redirect
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.strategy.provider_name());

    // Create router
    let app = routes::create_router(state);

    info!("PayFast redirect service starting on http://{}", addr);

    if !is_prod {
        info!("Health: http://{}/health", addr);
        info!("Initiate: POST http://{}/initiate-payfast", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
