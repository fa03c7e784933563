//! # pay-payfast
//!
//! PayFast redirect strategy for payfast-redirect-rs.
//!
//! PayFast's "custom integration" is a browser redirect: the merchant builds
//! a form-encoded parameter list, signs it with an MD5 checksum (optionally
//! salted with the account passphrase) and sends the customer to the hosted
//! process page with those parameters in the query string.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_payfast::PayFastRedirectStrategy;
//! use pay_core::{new_order_id, PaymentRequest, PaymentStrategy};
//!
//! let strategy = PayFastRedirectStrategy::from_env("http://localhost:8000")?;
//!
//! let request = PaymentRequest::new("Test Product", 100.0, "buyer@example.com");
//! let checkout = strategy.create_redirect(&request, &new_order_id())?;
//!
//! // Redirect user to checkout.redirect_url
//! ```

pub mod checkout;
pub mod config;
pub mod signature;

// Re-exports
pub use checkout::{PayFastRedirectStrategy, PAYFAST_FIELD_ORDER};
pub use config::{PayFastConfig, LIVE_PROCESS_URL, SANDBOX_PROCESS_URL};
pub use signature::{
    encode_parameters, generate_signature, quote_plus, verify_signature, SIGNATURE_KEY,
};
