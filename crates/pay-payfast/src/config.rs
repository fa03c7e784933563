//! # PayFast Configuration
//!
//! Merchant credentials and callback URLs for the PayFast integration.
//! Secrets are loaded from environment variables once at startup and never
//! mutated afterwards.

use pay_core::{CheckoutUrls, PaymentError};
use std::env;
use std::fmt;

/// Sandbox process endpoint
pub const SANDBOX_PROCESS_URL: &str = "https://sandbox.payfast.co.za/eng/process";

/// Live process endpoint
pub const LIVE_PROCESS_URL: &str = "https://www.payfast.co.za/eng/process";

/// PayFast merchant configuration
#[derive(Clone, PartialEq, Eq)]
pub struct PayFastConfig {
    /// Hosted payment page the customer is redirected to
    pub process_url: String,

    /// Merchant ID issued by PayFast
    pub merchant_id: String,

    /// Merchant key issued by PayFast
    pub merchant_key: String,

    /// Passphrase set on the merchant account; `None` disables it
    pub passphrase: Option<String>,

    /// Placeholder sent as the payer's first name
    pub name_first: String,

    /// Return/cancel/notify callbacks
    pub urls: CheckoutUrls,
}

impl PayFastConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYFAST_MERCHANT_ID`
    /// - `PAYFAST_MERCHANT_KEY`
    ///
    /// Optional: `PAYFAST_PROCESS_URL`, `PAYFAST_PASSPHRASE`,
    /// `PAYFAST_NAME_FIRST`, `PAYFAST_RETURN_URL`, `PAYFAST_CANCEL_URL`,
    /// `PAYFAST_NOTIFY_URL`. Callbacks default to paths under `base_url`.
    pub fn from_env(base_url: &str) -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(base_url, |name| env::var(name).ok())
    }

    /// Build configuration from any variable source.
    ///
    /// `lookup` returns the value of a variable, or `None` when unset.
    pub fn from_lookup<F>(base_url: &str, lookup: F) -> Result<Self, PaymentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(PaymentError::Configuration(format!("{} not set", name))),
        };

        let merchant_id = required("PAYFAST_MERCHANT_ID")?;
        let merchant_key = required("PAYFAST_MERCHANT_KEY")?;

        let process_url =
            lookup("PAYFAST_PROCESS_URL").unwrap_or_else(|| SANDBOX_PROCESS_URL.to_string());

        if !process_url.starts_with("https://") && !process_url.starts_with("http://") {
            return Err(PaymentError::Configuration(
                "PAYFAST_PROCESS_URL must be an http(s) URL".to_string(),
            ));
        }

        let defaults = CheckoutUrls::from_base_url(base_url);
        let urls = CheckoutUrls {
            return_url: lookup("PAYFAST_RETURN_URL").unwrap_or(defaults.return_url),
            cancel_url: lookup("PAYFAST_CANCEL_URL").unwrap_or(defaults.cancel_url),
            notify_url: lookup("PAYFAST_NOTIFY_URL").unwrap_or(defaults.notify_url),
        };

        Ok(Self {
            process_url,
            merchant_id,
            merchant_key,
            passphrase: lookup("PAYFAST_PASSPHRASE").filter(|p| !p.is_empty()),
            name_first: lookup("PAYFAST_NAME_FIRST").unwrap_or_else(|| "Test".to_string()),
            urls,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        merchant_id: impl Into<String>,
        merchant_key: impl Into<String>,
        passphrase: Option<&str>,
    ) -> Self {
        Self {
            process_url: SANDBOX_PROCESS_URL.to_string(),
            merchant_id: merchant_id.into(),
            merchant_key: merchant_key.into(),
            passphrase: passphrase.filter(|p| !p.is_empty()).map(String::from),
            name_first: "Test".to_string(),
            urls: CheckoutUrls::default(),
        }
    }

    /// Check if pointing at the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.process_url.contains("sandbox.payfast")
    }

    /// Passphrase as used by the signer
    pub fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref()
    }

    /// Builder: set the process URL
    pub fn with_process_url(mut self, url: impl Into<String>) -> Self {
        self.process_url = url.into();
        self
    }

    /// Builder: set the callback URLs
    pub fn with_urls(mut self, urls: CheckoutUrls) -> Self {
        self.urls = urls;
        self
    }
}

impl fmt::Debug for PayFastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayFastConfig")
            .field("process_url", &self.process_url)
            .field("merchant_id", &self.merchant_id)
            .field("merchant_key", &"[redacted]")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[redacted]"))
            .field("name_first", &self.name_first)
            .field("urls", &self.urls)
            .finish()
    }
}
