//! # Request Handlers
//!
//! Axum request handlers for the payment API.

use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use pay_core::{new_order_id, PaymentError, PaymentRequest, SigningParameters};
use serde::{Deserialize, Serialize};
use std::any::Any;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Successful redirect response
#[derive(Debug, Serialize)]
pub struct InitiatePaymentResponse {
    pub status: &'static str,
    /// Gateway name
    pub payment_service: &'static str,
    /// Hosted payment page URL (redirect user here)
    pub redirect_url: String,
    /// Every parameter sent to the gateway, signature included
    pub payload_debug: SigningParameters,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn payment_error_to_response(err: PaymentError) -> ApiError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string());
    (StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR), Json(response))
}

/// Turn a handler panic into a 500 with the panic message as detail
pub fn panic_to_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unexpected server error".to_string()
    };

    error!("Handler panicked: {}", detail);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(detail))).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "payfast-redirect",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Build a signed PayFast redirect for the posted payment
#[instrument(skip(state, payload))]
pub async fn initiate_payfast(
    State(state): State<AppState>,
    payload: Result<Json<PaymentRequest>, JsonRejection>,
) -> Result<Json<InitiatePaymentResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected payment body: {}", rejection.body_text());
        (rejection.status(), Json(ErrorResponse::new(rejection.body_text())))
    })?;

    request.validate().map_err(|e| {
        warn!("Invalid payment request: {}", e);
        payment_error_to_response(e)
    })?;

    let order_id = new_order_id();
    let strategy = &state.strategy;

    let checkout = strategy.create_redirect(&request, &order_id).map_err(|e| {
        error!("Failed to build {} redirect: {}", strategy.provider_name(), e);
        payment_error_to_response(e)
    })?;

    info!(
        "Created {} redirect: order={}, amount={}",
        strategy.provider_name(),
        order_id,
        request.formatted_amount()
    );

    Ok(Json(InitiatePaymentResponse {
        status: "success",
        payment_service: strategy.provider_name(),
        redirect_url: checkout.redirect_url,
        payload_debug: checkout.parameters,
    }))
}

/// Return page after a completed payment
pub async fn payment_success(
    Query(params): Query<std::collections::HashMap<String, String>>,
) -> impl IntoResponse {
    let reference = params
        .get("m_payment_id")
        .map(|s| s.as_str())
        .unwrap_or("unknown");
    // Only [A-Za-z0-9_-] from the query string reaches the page.
    let reference: String = reference
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    Html(format!(r#"
<!DOCTYPE html>
<html>
<head><title>Payment Successful</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0;">
    <div style="padding: 60px; text-align: center;">
        <h1>Payment Successful!</h1>
        <p>Reference: <code>{}</code></p>
        <p style="color: #666;">Your payment is being confirmed by PayFast.</p>
    </div>
</body>
</html>
"#, reference))
}

/// Return page after the customer cancelled on PayFast
pub async fn payment_cancel() -> impl IntoResponse {
    Html(r#"
<!DOCTYPE html>
<html>
<head><title>Payment Cancelled</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0;">
    <div style="padding: 60px; text-align: center;">
        <h1>Payment Cancelled</h1>
        <p style="color: #666;">No charges were made.</p>
    </div>
</body>
</html>
"#)
}
