//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token authentication for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use chat_feed::backend::middleware::auth_middleware;
//! use chat_feed::backend::server::AppState;
//! use chat_feed::shared::ServerConfig;
//!
//! let state = AppState::new(ServerConfig::default());
//! let router: Router<AppState> = Router::new()
//!     .route("/private", get(|| async { "ok" }))
//!     .route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
