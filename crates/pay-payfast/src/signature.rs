//! # PayFast Signature
//!
//! Canonical form encoding and the MD5 checksum PayFast verifies on the
//! hosted payment page.
//!
//! The checksum input is the `application/x-www-form-urlencoded` rendering of
//! the parameters in insertion order, with null values skipped, followed by
//! `&passphrase=<value>` when a passphrase is configured. The digest must match
//! the gateway bit for bit, so the algorithm is fixed to MD5.

use pay_core::{PaymentError, PaymentResult, SigningParameters};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// Key under which the checksum is appended
pub const SIGNATURE_KEY: &str = "signature";

/// Characters left as-is by the gateway's quoting: `A-Z a-z 0-9 - . _ ~`
const FORM_QUOTE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a single key or value, with `+` for spaces.
pub fn quote_plus(input: &str) -> String {
    // Literal '+' is already escaped to %2B, so this cannot collide.
    utf8_percent_encode(input, FORM_QUOTE)
        .to_string()
        .replace("%20", "+")
}

/// Render a parameter value as text, or fail for types the form encoding
/// cannot represent.
fn value_text(key: &str, value: &Value) -> PaymentResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(_) => Err(PaymentError::Signing(format!(
            "cannot encode boolean value for `{}`",
            key
        ))),
        Value::Array(_) | Value::Object(_) => Err(PaymentError::Signing(format!(
            "cannot encode nested value for `{}`",
            key
        ))),
        Value::Null => Err(PaymentError::Signing(format!(
            "null value for `{}` must be skipped before encoding",
            key
        ))),
    }
}

/// Encode the non-null parameters as a query string in insertion order.
///
/// Empty strings are kept; only nulls are dropped.
pub fn encode_parameters(params: &SigningParameters) -> PaymentResult<String> {
    let mut pairs = Vec::new();
    for (key, value) in params.present() {
        let text = value_text(key, value)?;
        pairs.push(format!("{}={}", quote_plus(key), quote_plus(&text)));
    }
    Ok(pairs.join("&"))
}

/// Compute the gateway checksum over `params`.
///
/// An empty or missing passphrase is not appended. The `signature` key, if
/// present, is excluded so a checksum never covers itself.
pub fn generate_signature(
    params: &SigningParameters,
    passphrase: Option<&str>,
) -> PaymentResult<String> {
    let unsigned: SigningParameters = params
        .iter()
        .filter(|(k, _)| *k != SIGNATURE_KEY)
        .map(|(k, v)| (k, v.clone()))
        .collect();

    let mut payload = encode_parameters(&unsigned)?;

    if let Some(passphrase) = passphrase.filter(|p| !p.is_empty()) {
        payload.push_str("&passphrase=");
        payload.push_str(&quote_plus(passphrase));
    }

    let digest = md5::compute(payload.as_bytes());
    Ok(hex::encode(digest.0))
}

/// Check a signature received back from the gateway.
pub fn verify_signature(
    params: &SigningParameters,
    passphrase: Option<&str>,
) -> PaymentResult<bool> {
    let Some(received) = params.get_str(SIGNATURE_KEY) else {
        return Ok(false);
    };
    let expected = generate_signature(params, passphrase)?;
    Ok(expected.eq_ignore_ascii_case(received))
}
