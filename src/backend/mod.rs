//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! the message log and the user/auth endpoints as JSON.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`chat`** - The message log and its handlers
//! - **`auth`** - Users, tokens, sessions and their handlers
//! - **`middleware`** - Request authentication
//! - **`error`** - Backend error types and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── chat/           - Message log and handlers
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the message log, the `Services` capability set and the
//! configuration. It is injected into handlers through Axum's `State`
//! extractor; nothing lives in a global.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Validation happens before any
//! state is touched; every error leaves as a JSON body with `error`,
//! `status` and `timestamp`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Message log and handlers
pub mod chat;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use server::{create_app, AppState, Services};
pub use chat::MessageLog;
pub use error::BackendError;
