//! # PayFast Redirect Checkout
//!
//! Builds the signed redirect to PayFast's hosted payment page.
//! There is no API call: the customer's browser carries the parameters.

use crate::config::PayFastConfig;
use crate::signature::{encode_parameters, generate_signature, SIGNATURE_KEY};
use pay_core::{
    PaymentRequest, PaymentResult, PaymentStrategy, RedirectCheckout, SigningParameters,
};
use tracing::{debug, instrument};

/// Field order PayFast signs over. `signature` is appended after these.
pub const PAYFAST_FIELD_ORDER: &[&str] = &[
    "merchant_id",
    "merchant_key",
    "return_url",
    "cancel_url",
    "notify_url",
    "name_first",
    "email_address",
    "m_payment_id",
    "amount",
    "item_name",
];

/// PayFast redirect strategy
pub struct PayFastRedirectStrategy {
    config: PayFastConfig,
}

impl PayFastRedirectStrategy {
    /// Create a new PayFast strategy
    pub fn new(config: PayFastConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env(base_url: &str) -> PaymentResult<Self> {
        let config = PayFastConfig::from_env(base_url)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PayFastConfig {
        &self.config
    }

    /// Assemble the unsigned parameters in `PAYFAST_FIELD_ORDER`.
    pub fn build_parameters(&self, request: &PaymentRequest, order_id: &str) -> SigningParameters {
        let config = &self.config;
        SigningParameters::new()
            .with("merchant_id", config.merchant_id.as_str())
            .with("merchant_key", config.merchant_key.as_str())
            .with("return_url", config.urls.return_url.as_str())
            .with("cancel_url", config.urls.cancel_url.as_str())
            .with("notify_url", config.urls.notify_url.as_str())
            .with("name_first", config.name_first.as_str())
            .with("email_address", request.email.as_str())
            .with("m_payment_id", order_id)
            .with("amount", request.formatted_amount())
            .with("item_name", request.item_name.as_str())
    }

    /// Sign `params`, append the signature and render the redirect URL.
    ///
    /// The URL query is encoded with the same rules and order as the
    /// checksum input.
    pub fn sign_and_build(&self, mut params: SigningParameters) -> PaymentResult<RedirectCheckout> {
        let signature = generate_signature(&params, self.config.passphrase())?;
        params.insert(SIGNATURE_KEY, signature);

        let query = encode_parameters(&params)?;
        let redirect_url = format!("{}?{}", self.config.process_url, query);

        Ok(RedirectCheckout {
            redirect_url,
            parameters: params,
        })
    }
}

impl PaymentStrategy for PayFastRedirectStrategy {
    #[instrument(skip(self, request))]
    fn create_redirect(
        &self,
        request: &PaymentRequest,
        order_id: &str,
    ) -> PaymentResult<RedirectCheckout> {
        let params = self.build_parameters(request, order_id);

        debug!(
            "Signing PayFast redirect: {} fields, amount={}",
            params.keys().len(),
            request.formatted_amount()
        );

        self.sign_and_build(params)
    }

    fn provider_name(&self) -> &'static str {
        "PayFast"
    }
}
