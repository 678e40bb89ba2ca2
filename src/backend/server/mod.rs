//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState, Services and FromRef implementations
//! ├── config.rs       - Configuration loading (file + environment)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the message log, the auth and user services, and the
//! configuration. It is cloned into every handler; all fields are `Arc`s.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use state::{AppState, Services};
pub use init::{create_app, create_app_with_state};
