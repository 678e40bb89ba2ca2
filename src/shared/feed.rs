//! Feed Cursor
//!
//! The client side of the feed poll. A reader holds a single integer, the id
//! of the first message it has not seen yet. Each poll sends that id; the
//! server answers with the suffix of the log starting there, and the reader
//! moves its cursor one past the last id it received.
//!
//! ```rust
//! use chat_feed::shared::{FeedCursor, Message};
//!
//! let mut cursor = FeedCursor::new();
//! let batch = vec![
//!     Message::new(0, "alice".to_string(), "hello".to_string()),
//!     Message::new(1, "bob".to_string(), "hi".to_string()),
//! ];
//! assert_eq!(cursor.advance(&batch), 2);
//! assert_eq!(cursor.position(), 2);
//!
//! // An empty poll leaves the cursor where it was
//! assert_eq!(cursor.advance(&[]), 0);
//! assert_eq!(cursor.position(), 2);
//! ```

use crate::shared::error::SharedError;
use crate::shared::message::{Message, MessageId};

/// Client-held position in the message feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedCursor {
    next: MessageId,
}

impl FeedCursor {
    /// A cursor at the start of the feed
    pub fn new() -> Self {
        Self::default()
    }

    /// A cursor resuming at `next`
    pub fn at(next: MessageId) -> Self {
        Self { next }
    }

    /// Id of the first message not yet seen
    pub fn position(&self) -> MessageId {
        self.next
    }

    /// Move past a batch returned by a poll at the current position
    ///
    /// Returns the number of messages in the batch. The cursor never moves
    /// backwards, so a stale batch cannot rewind it.
    pub fn advance(&mut self, batch: &[Message]) -> usize {
        if let Some(last) = batch.last() {
            self.next = self.next.max(last.id.saturating_add(1));
        }
        batch.len()
    }
}

/// Parse a cursor supplied in a path or query string
///
/// Accepts decimal digits with an optional sign. Negative cursors clamp to 0;
/// values past `u64::MAX` saturate, which reads as past the end of the log.
pub fn parse_cursor(raw: &str) -> Result<MessageId, SharedError> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SharedError::validation("cursor", "Invalid message index"));
    }

    if negative {
        return Ok(0);
    }

    Ok(digits.parse::<MessageId>().unwrap_or(MessageId::MAX))
}

/// Parse a message or user id supplied in a path
///
/// Stricter than [`parse_cursor`]: only plain decimal digits are accepted.
pub fn parse_id(raw: &str, field: &str, message: &str) -> Result<u64, SharedError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SharedError::validation(field, message));
    }
    raw.parse::<u64>()
        .map_err(|_| SharedError::validation(field, message))
}
