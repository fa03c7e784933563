//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /initiate-payfast - Build a signed PayFast redirect
/// - GET  /health, / - Health check
/// - GET  /success - Return page after payment
/// - GET  /cancel - Return page after cancellation
pub fn create_router(state: AppState) -> Router {
    // Browser front-ends call this from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Payment
        .route("/initiate-payfast", post(handlers::initiate_payfast))
        // Gateway return pages
        .route("/success", get(handlers::payment_success))
        .route("/cancel", get(handlers::payment_cancel))
        // Middleware
        .layer(CatchPanicLayer::custom(handlers::panic_to_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use pay_core::{PaymentRequest, PaymentResult, PaymentStrategy, RedirectCheckout};
    use pay_payfast::{generate_signature, PayFastConfig, PayFastRedirectStrategy, SIGNATURE_KEY};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    const PASSPHRASE: &str = "XXXXXXXX";

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            base_url: "http://localhost:8000".to_string(),
            environment: "test".to_string(),
        }
    }

    fn payfast() -> PayFastRedirectStrategy {
        PayFastRedirectStrategy::new(PayFastConfig::new("XXXXXXXXX", "XXXXXXXX", Some(PASSPHRASE)))
    }

    fn app_with(strategy: Arc<dyn PaymentStrategy>) -> Router {
        create_router(AppState::with_strategy(test_config(), strategy))
    }

    /// Adds a field the form encoding cannot represent
    struct UnencodableStrategy(PayFastRedirectStrategy);

    impl PaymentStrategy for UnencodableStrategy {
        fn create_redirect(&self, request: &PaymentRequest, order_id: &str) -> PaymentResult<RedirectCheckout> {
            let params = self.0.build_parameters(request, order_id).with("custom_bool", true);
            self.0.sign_and_build(params)
        }

        fn provider_name(&self) -> &'static str {
            "PayFast"
        }
    }

    struct PanickingStrategy;

    impl PaymentStrategy for PanickingStrategy {
        fn create_redirect(&self, _: &PaymentRequest, _: &str) -> PaymentResult<RedirectCheckout> {
            panic!("parameter assembly exploded")
        }

        fn provider_name(&self) -> &'static str {
            "PayFast"
        }
    }

    async fn post_raw(app: Router, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/initiate-payfast")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
        let (status, text) = post_raw(app, body).await;
        (status, serde_json::from_str(&text).unwrap())
    }

    #[tokio::test]
    async fn test_initiate_payfast_end_to_end() {
        let (status, body) = post_json(
            app_with(Arc::new(payfast())),
            r#"{"item_name":"Test Product","amount":100.0,"email":"buyer@example.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["payment_service"], "PayFast");

        let url = body["redirect_url"].as_str().unwrap();
        assert!(url.starts_with("https://sandbox.payfast.co.za/eng/process?"));
        assert!(url.contains("item_name=Test+Product"));
        assert!(url.contains("amount=100.00"));
        assert!(url.contains("email_address=buyer%40example.com"));

        // Recompute the checksum from the echoed parameters, minus the signature
        let payload = body["payload_debug"].as_object().unwrap();
        let order_id = payload["m_payment_id"].as_str().unwrap();
        let unsigned = payfast().build_parameters(
            &PaymentRequest::new("Test Product", 100.0, "buyer@example.com"),
            order_id,
        );
        let expected = generate_signature(&unsigned, Some(PASSPHRASE)).unwrap();

        assert_eq!(payload[SIGNATURE_KEY], expected.as_str());
        assert!(url.ends_with(&format!("&signature={}", expected)));
    }

    #[tokio::test]
    async fn test_payload_debug_keeps_signing_order() {
        let (status, text) = post_raw(
            app_with(Arc::new(payfast())),
            r#"{"item_name":"Test Product","amount":100.0,"email":"buyer@example.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let debug = &text[text.find("\"payload_debug\"").unwrap()..];
        let positions: Vec<usize> = pay_payfast::PAYFAST_FIELD_ORDER
            .iter()
            .chain(std::iter::once(&SIGNATURE_KEY))
            .map(|key| debug.find(&format!("\"{}\":", key)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_amount_rounding_over_http() {
        let (status, body) = post_json(
            app_with(Arc::new(payfast())),
            r#"{"item_name":"Widget","amount":99.999,"email":"buyer@example.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["payload_debug"]["amount"], "100.00");
    }

    #[tokio::test]
    async fn test_unencodable_field_is_server_error() {
        let (status, body) = post_json(
            app_with(Arc::new(UnencodableStrategy(payfast()))),
            r#"{"item_name":"Widget","amount":10,"email":"buyer@example.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let detail = body["detail"].as_str().unwrap();
        assert!(!detail.is_empty());
        assert!(detail.contains("custom_bool"));
    }

    #[tokio::test]
    async fn test_panic_is_server_error() {
        let (status, body) = post_json(
            app_with(Arc::new(PanickingStrategy)),
            r#"{"item_name":"Widget","amount":10,"email":"buyer@example.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "parameter assembly exploded");
    }

    #[tokio::test]
    async fn test_sub_cent_amount_rejected() {
        let (status, body) = post_json(
            app_with(Arc::new(payfast())),
            r#"{"item_name":"W","amount":0.001,"email":"a@b.co"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("at least 0.01"));
        assert!(body.get("redirect_url").is_none());
    }

    #[tokio::test]
    async fn test_missing_field_rejected() {
        let (status, body) = post_json(
            app_with(Arc::new(payfast())),
            r#"{"item_name":"Widget","amount":10}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let (status, body) = post_json(app_with(Arc::new(payfast())), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_semantic_validation() {
        for body in [
            r#"{"item_name":"","amount":10,"email":"buyer@example.com"}"#,
            r#"{"item_name":"Widget","amount":0,"email":"buyer@example.com"}"#,
            r#"{"item_name":"Widget","amount":-1.5,"email":"buyer@example.com"}"#,
            r#"{"item_name":"Widget","amount":0.001,"email":"buyer@example.com"}"#,
            r#"{"item_name":"Widget","amount":10,"email":"not-an-email"}"#,
        ] {
            let (status, json) = post_json(app_with(Arc::new(payfast())), body).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
            assert!(json["detail"].is_string());
        }
    }

    #[tokio::test]
    async fn test_health() {
        let response = app_with(Arc::new(payfast()))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_return_pages() {
        for uri in ["/success?m_payment_id=abc123", "/cancel"] {
            let response = app_with(Arc::new(payfast()))
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "uri: {}", uri);
        }
    }
}
