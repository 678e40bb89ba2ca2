//! Chat Handlers Module
//!
//! Axum handlers for the message endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs   - Module exports and documentation
//! ├── post.rs  - POST /message
//! └── feed.rs  - GET /message/{cursor}, GET /message?last=, GET /messages/{id}
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use chat_feed::backend::chat::handlers::{get_feed, get_feed_query, get_message, post_message};
//! use chat_feed::backend::server::AppState;
//! use axum::{routing::get, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/message", get(get_feed_query).post(post_message))
//!     .route("/message/{cursor}", get(get_feed))
//!     .route("/messages/{id}", get(get_message));
//! ```

/// POST /message handler
pub mod post;

/// Feed poll handlers
pub mod feed;

pub use post::{post_message, MessageForm};
pub use feed::{get_feed, get_feed_query, get_message};
