/**
 * Router Configuration
 *
 * Combines all route configurations into a single Axum router and wraps it
 * in the shared layers (innermost first):
 * - Panic recovery, turning a handler panic into a JSON 500
 * - Request tracing
 * - CORS allowing any origin, method and header
 *
 * Unknown paths and unsupported methods get the JSON error body as well.
 */

use axum::{
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_chat_routes(Router::new());
    let router = configure_api_routes(router, &app_state);

    with_shared_layers(router).with_state(app_state)
}

/// Fallbacks and middleware applied on top of every route
fn with_shared_layers(router: Router<AppState>) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}

async fn method_not_allowed() -> BackendError {
    BackendError::MethodNotAllowed
}

fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    BackendError::internal(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::shared::ServerConfig;

    async fn exploding_handler() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_json_500() {
        let config = ServerConfig::builder().bcrypt_cost(4).build().unwrap();
        let app = with_shared_layers(Router::new().route("/explode", get(exploding_handler)))
            .with_state(AppState::new(config));

        let response = app
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "Internal server error");
        assert_eq!(value["status"], 500);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_panic_payload_detail() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
