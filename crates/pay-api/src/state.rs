//! # Application State
//!
//! Shared state for the Axum application.
//! Built once at startup; nothing in it is mutated afterwards.

use pay_core::BoxedPaymentStrategy;
use pay_payfast::PayFastRedirectStrategy;
use std::net::SocketAddr;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Public base URL, used to derive the gateway callbacks
    pub base_url: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Redirect gateway used by `/initiate-payfast`
    pub strategy: BoxedPaymentStrategy,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the PayFast strategy loaded from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let payfast = PayFastRedirectStrategy::from_env(&config.base_url)
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayFast: {}", e))?;

        if config.is_production() && payfast.config().is_sandbox() {
            tracing::warn!("Running in production against the PayFast sandbox");
        }

        Ok(Self::with_strategy(config, Arc::new(payfast)))
    }

    /// Create an AppState around an explicit strategy
    pub fn with_strategy(config: AppConfig, strategy: BoxedPaymentStrategy) -> Self {
        Self { strategy, config }
    }
}
