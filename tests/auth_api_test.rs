//! User and auth API integration tests

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use chat_feed::backend::server::init::create_app;
use common::assertions::assert_error_body;
use common::*;

#[tokio::test]
async fn test_register_assigns_sequential_ids() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/user", json!({ "name": "alice", "password": "pw" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 0);
    assert!(body["timestamp"].is_string());

    let (_, body) = send(&app, post_json("/user", json!({ "name": "bob", "password": "pw" }))).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/user", json!({ "name": "", "password": "pw" }))).await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST, "Empty name");

    let (status, body) = send(&app, post_json("/user", json!({ "name": "alice" }))).await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST, "Empty password");
}

#[tokio::test]
async fn test_register_rejects_name_too_long_to_post_as() {
    let app = test_app();
    let too_long = "n".repeat(101);

    let (status, body) = send(&app, post_json("/user", json!({ "name": too_long, "password": "pw" }))).await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST, "name exceeds 100 characters");

    let longest = "n".repeat(100);
    let (_, token) = register_and_login(&app, &longest, "pw").await;
    let (status, body) = send(
        &app,
        post_json_with_token("/message", json!({ "text": "hi" }), &token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", body);

    let (_, body) = send(&app, get("/messages/0")).await;
    assert_eq!(body["message"]["sender"], longest);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = test_app();
    register_and_login(&app, "alice", "secret").await;

    let (status, body) = send(&app, post_json("/auth/0", json!({ "password": "nope" }))).await;

    assert_error_body(status, &body, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user_and_bad_id() {
    let app = test_app();

    let (status, body) = send(&app, post_json("/auth/42", json!({ "password": "pw" }))).await;
    assert_error_body(status, &body, StatusCode::UNAUTHORIZED, "Invalid credentials");

    let (status, body) = send(&app, post_json("/auth/alice", json!({ "password": "pw" }))).await;
    assert_error_body(status, &body, StatusCode::BAD_REQUEST, "Invalid user id");

    let (status, body) = send(&app, post_json("/auth/%FF", json!({ "password": "pw" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_get_user_requires_token() {
    let app = test_app();
    let (user_id, token) = register_and_login(&app, "alice", "secret").await;
    let uri = format!("/user/{}", user_id);

    let (status, body) = send(&app, get(&uri)).await;
    assert_error_body(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");

    let (status, body) = send(&app, get_with_token(&uri, "garbage")).await;
    assert_error_body(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");

    let (status, body) = send(&app, get_with_token(&uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user_id);
    assert_eq!(body["user"]["name"], "alice");
    assert!(body["user"]["created"].is_string());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_get_missing_user() {
    let app = test_app();
    let (_, token) = register_and_login(&app, "alice", "secret").await;

    let (status, body) = send(&app, get_with_token("/user/9", &token)).await;

    assert_error_body(status, &body, StatusCode::NOT_FOUND, "User not found");
}

#[tokio::test]
async fn test_authenticated_post_uses_account_name() {
    let app = test_app();
    let (_, token) = register_and_login(&app, "alice", "secret").await;

    let (status, body) = send(
        &app,
        post_json_with_token("/message", json!({ "sender": "mallory", "text": "hi" }), &token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, get(&format!("/messages/{}", body["id"]))).await;
    assert_eq!(body["message"]["sender"], "alice");
}

#[tokio::test]
async fn test_post_with_invalid_token_is_rejected() {
    let app = test_app();

    let (status, body) = send(
        &app,
        post_json_with_token("/message", json!({ "sender": "alice", "text": "hi" }), "garbage"),
    )
    .await;

    assert_error_body(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_require_auth_rejects_anonymous_posts() {
    let app = create_app(auth_required_config());

    let (status, body) = send(&app, post_json("/message", json!({ "sender": "alice", "text": "hi" }))).await;
    assert_error_body(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");

    let (_, token) = register_and_login(&app, "alice", "secret").await;
    let (status, _) = send(
        &app,
        post_json_with_token("/message", json!({ "text": "hi" }), &token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, get("/message/0")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = test_app();
    let (user_id, token) = register_and_login(&app, "alice", "secret").await;
    let uri = format!("/auth/{}", user_id);

    let (status, body) = send(&app, delete_with_token(&uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], true);

    let (status, _) = send(&app, get_with_token(&format!("/user/{}", user_id), &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, delete_with_token(&uri, &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_other_user_is_rejected() {
    let app = test_app();
    let (_, alice_token) = register_and_login(&app, "alice", "secret").await;
    let (bob_id, _) = register_and_login(&app, "bob", "hunter2").await;

    let (status, body) = send(&app, delete_with_token(&format!("/auth/{}", bob_id), &alice_token)).await;

    assert_error_body(status, &body, StatusCode::UNAUTHORIZED, "Unauthorized");
}

#[tokio::test]
async fn test_new_login_replaces_previous_session() {
    let app = test_app();
    let (user_id, first) = register_and_login(&app, "alice", "secret").await;

    let (status, body) = send(
        &app,
        post_json(&format!("/auth/{}", user_id), json!({ "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let second = body["token"].as_str().unwrap().to_string();
    let uri = format!("/user/{}", user_id);

    let (status, _) = send(&app, get_with_token(&uri, &first)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get_with_token(&uri, &second)).await;
    assert_eq!(status, StatusCode::OK);
}
