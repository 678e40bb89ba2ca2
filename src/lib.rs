//! Chat Feed - Main Library
//!
//! A small chat backend that exposes an append-only message log over
//! HTTP+JSON. Clients post messages and poll the log with a cursor that
//! names the first message they have not yet seen.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by both the server and the client
//!   - Message structure and API envelopes
//!   - Feed cursor state
//!   - Configuration and error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server and router
//!   - The message log and its handlers
//!   - User registration and token authentication
//!
//! - **`client`** - Polling HTTP client (only compiled with the `client` feature)
//!
//! # Feed Protocol
//!
//! 1. A writer posts `sender` and `text`; the server assigns the next
//!    sequential id (the current length of the log).
//! 2. A reader polls with its cursor; the server returns every message whose
//!    id is at least the cursor, in id order.
//! 3. The reader moves its cursor to one past the last id it received.
//!
//! Polling with an unchanged cursor while no one writes always returns the
//! same result, and the cursor never moves backwards.
//!
//! # Usage
//!
//! ```rust,no_run
//! use chat_feed::backend::server::init::create_app;
//! use chat_feed::shared::ServerConfig;
//!
//! # async fn example() {
//! let app = create_app(ServerConfig::default());
//! // Serve with axum::serve
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The message log serializes writers behind a `RwLock`; readers copy the
//! requested suffix and release the lock before serializing the response.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Polling HTTP client
#[cfg(feature = "client")]
pub mod client;
