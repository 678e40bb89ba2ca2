//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and the polling client. These types are serialized over
//! HTTP as JSON.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code.

/// Message data structure
pub mod message;

/// API request and response envelopes
pub mod api;

/// Client-side feed cursor
pub mod feed;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::{Message, MessageId};
pub use feed::{parse_cursor, parse_id, FeedCursor};
pub use error::SharedError;
pub use config::{ServerConfig, ServerConfigBuilder, ConfigError};
