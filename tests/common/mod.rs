//! Common test utilities and helpers
//!
//! - In-process requests against the router (`tower::ServiceExt::oneshot`)
//! - A live server on an ephemeral port for client tests
//! - Request builders and custom assertion macros

#![allow(dead_code)]

pub mod assertions;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use chat_feed::backend::server::init::create_app;
use chat_feed::shared::ServerConfig;

pub const TEST_SECRET: &str = "test-secret-for-chat-feed";

/// Config with the cheapest bcrypt cost so auth tests stay fast
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .host("127.0.0.1")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test config is valid")
}

/// Same as [`test_config`] but rejecting anonymous posts
pub fn auth_required_config() -> ServerConfig {
    ServerConfig::builder()
        .host("127.0.0.1")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .require_auth(true)
        .build()
        .expect("test config is valid")
}

pub fn test_app() -> Router {
    create_app(test_config())
}

/// Send a request through the router and return the raw response
pub async fn call(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

/// Send a request and decode the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = call(app, request).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };
    (status, value)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, auth_header(token))
        .body(Body::empty())
        .expect("valid request")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn post_json_with_token(uri: &str, body: Value, token: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, auth_header(token))
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn delete_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, auth_header(token))
        .body(Body::empty())
        .expect("valid request")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Post a message as JSON and return the assigned id
pub async fn post_message(app: &Router, sender: &str, text: &str) -> u64 {
    let (status, body) = send(
        app,
        post_json("/message", serde_json::json!({ "sender": sender, "text": text })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "post failed: {}", body);
    body["id"].as_u64().expect("id is a number")
}

/// Register a user and log in, returning `(user_id, token)`
pub async fn register_and_login(app: &Router, name: &str, password: &str) -> (u64, String) {
    let (status, body) = send(
        app,
        post_json("/user", serde_json::json!({ "name": name, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    let user_id = body["id"].as_u64().expect("id is a number");

    let (status, body) = send(
        app,
        post_json(
            &format!("/auth/{}", user_id),
            serde_json::json!({ "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "login failed: {}", body);
    let token = body["token"].as_str().expect("token is a string").to_string();

    (user_id, token)
}

/// Serve the app on an ephemeral local port and return its base URL
pub async fn spawn_server(config: ServerConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    let app = create_app(config);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    format!("http://{}", addr)
}
