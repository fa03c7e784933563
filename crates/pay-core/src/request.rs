//! # Payment Request
//!
//! The inbound payment request and its boundary validation.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};

/// A payment request as received from the client.
///
/// Constructed per HTTP request and discarded after the redirect is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Name of the item being paid for
    pub item_name: String,
    /// Order amount in major currency units (e.g. rand, not cents)
    pub amount: f64,
    /// Payer email address
    pub email: String,
}

impl PaymentRequest {
    pub fn new(item_name: impl Into<String>, amount: f64, email: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            amount,
            email: email.into(),
        }
    }

    /// Check the request against the boundary schema.
    pub fn validate(&self) -> PaymentResult<()> {
        if self.item_name.trim().is_empty() {
            return Err(PaymentError::Validation(
                "item_name must not be empty".to_string(),
            ));
        }

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(PaymentError::Validation(format!(
                "amount must be a positive number, got {}",
                self.amount
            )));
        }

        // The gateway receives the two-decimal rendering, which must stay positive.
        if format_amount(self.amount) == "0.00" {
            return Err(PaymentError::Validation(format!(
                "amount must be at least 0.01, got {}",
                self.amount
            )));
        }

        if !is_valid_email(&self.email) {
            return Err(PaymentError::Validation(format!(
                "email is not a valid address: {}",
                self.email
            )));
        }

        Ok(())
    }

    /// Amount rendered the way the gateway expects it (`100.00`).
    pub fn formatted_amount(&self) -> String {
        format_amount(self.amount)
    }
}

/// Format an amount as fixed-point with exactly two decimals.
///
/// No thousands separator and no currency symbol. Rounds to nearest on the
/// exact binary value, so `99.999` becomes `100.00`.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
