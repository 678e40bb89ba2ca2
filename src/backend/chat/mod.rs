//! Chat Backend Module
//!
//! Server-side chat functionality:
//! - The append-only message log (id assignment, suffix reads)
//! - HTTP handlers for posting and polling messages
//!
//! The log lives in memory for the lifetime of the process.
//!
//! # Example
//!
//! ```rust
//! use chat_feed::backend::chat::MessageLog;
//!
//! let log = MessageLog::new();
//! assert_eq!(log.append("alice", "hello").unwrap(), 0);
//! assert_eq!(log.append("bob", "hi").unwrap(), 1);
//! assert_eq!(log.read_from(1).unwrap().len(), 1);
//! assert!(log.read_from(2).unwrap().is_empty());
//! ```

/// Append-only message log
pub mod log;

/// HTTP handlers
pub mod handlers;

pub use log::MessageLog;
pub use handlers::{get_feed, get_feed_query, get_message, post_message};
