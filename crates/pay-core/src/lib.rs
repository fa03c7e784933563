//! # pay-core
//!
//! Core types and traits for the payfast-redirect payment service.
//!
//! This crate provides:
//! - `PaymentRequest` with boundary validation and amount formatting
//! - `SigningParameters`, the ordered parameter list a gateway signs over
//! - `PaymentStrategy` trait for redirect gateways
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{new_order_id, PaymentRequest, PaymentStrategy};
//!
//! let request = PaymentRequest::new("Test Product", 100.0, "buyer@example.com");
//! request.validate()?;
//!
//! let checkout = strategy.create_redirect(&request, &new_order_id())?;
//! // Redirect the customer to checkout.redirect_url
//! ```

pub mod error;
pub mod params;
pub mod request;
pub mod strategy;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use params::SigningParameters;
pub use request::{format_amount, PaymentRequest};
pub use strategy::{
    new_order_id, BoxedPaymentStrategy, CheckoutUrls, PaymentStrategy, RedirectCheckout,
};
