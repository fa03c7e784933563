//! # Payment Error Types
//!
//! Typed error handling for the redirect payment flow.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing merchant credentials, bad URLs)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request body failed validation at the HTTP boundary
    #[error("{0}")]
    Validation(String),

    /// A parameter value could not be encoded for signing
    #[error("Signing error: {0}")]
    Signing(String),

    /// Anything else that went wrong while assembling the redirect
    #[error("{0}")]
    Unexpected(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::Validation(_) => 422,
            PaymentError::Signing(_) => 500,
            PaymentError::Unexpected(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
