//! # Payment Strategy Trait
//!
//! Strategy trait for redirect-style payment gateways.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentStrategy (trait)                  │
//! │  ├── create_redirect()                                      │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                   ┌────────┴────────┐
//!                   │ PayFastRedirect │
//!                   │    Strategy     │
//!                   └─────────────────┘
//! ```

use crate::error::PaymentResult;
use crate::params::SigningParameters;
use crate::request::PaymentRequest;
use serde::Serialize;
use std::sync::Arc;

/// A signed redirect to a hosted payment page
#[derive(Debug, Clone, Serialize)]
pub struct RedirectCheckout {
    /// Full URL the customer should be sent to
    pub redirect_url: String,
    /// Parameters used to build the URL, including the signature
    pub parameters: SigningParameters,
}

/// Core trait for redirect gateway implementations.
///
/// Implementations are pure: no I/O, no shared mutable state, so a single
/// instance may serve any number of concurrent requests.
pub trait PaymentStrategy: Send + Sync {
    /// Build the signed redirect for a validated request.
    ///
    /// # Arguments
    /// * `request` - The validated payment request
    /// * `order_id` - Merchant-side identifier for this payment
    fn create_redirect(
        &self,
        request: &PaymentRequest,
        order_id: &str,
    ) -> PaymentResult<RedirectCheckout>;

    /// Get the provider name (for logging and responses).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// Generate a fresh merchant order identifier
pub fn new_order_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Callback URLs handed to the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutUrls {
    /// Where the customer lands after paying
    pub return_url: String,
    /// Where the customer lands after cancelling
    pub cancel_url: String,
    /// Server-to-server notification endpoint
    pub notify_url: String,
}

impl CheckoutUrls {
    /// Derive the three callbacks from the service's public base URL
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            return_url: format!("{}/success", base),
            cancel_url: format!("{}/cancel", base),
            notify_url: format!("{}/notify", base),
        }
    }
}

impl Default for CheckoutUrls {
    fn default() -> Self {
        Self::from_base_url("http://localhost:8000")
    }
}
