/**
 * Message Data Structure
 *
 * This module defines the Message struct stored in the message log
 * and returned by feed polls.
 *
 * The Message struct is shared between server and client, allowing
 * the same type to be serialized by the handlers and deserialized by
 * the polling client.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sequential message identifier; equal to the message's position in the log
pub type MessageId = u64;

/// Represents a single chat message
///
/// A message is built exactly once, when the log accepts an append, and is
/// never changed afterwards.
///
/// # Fields
/// * `id` - Position in the log, assigned by the server
/// * `timestamp` - Creation time, serialized as `when` (RFC3339)
/// * `sender` - Name of the writer
/// * `text` - The message content
///
/// # Example
/// ```rust
/// use chat_feed::shared::Message;
///
/// let message = Message::new(0, "alice".to_string(), "hello".to_string());
/// assert_eq!(message.id, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Position of the message in the log
    pub id: MessageId,
    /// Creation time
    #[serde(rename = "when")]
    pub timestamp: DateTime<Utc>,
    /// The sender's name
    pub sender: String,
    /// The message text content
    pub text: String,
}

impl Message {
    /// Create a message stamped with the current UTC time
    pub fn new(id: MessageId, sender: String, text: String) -> Self {
        Self {
            id,
            timestamp: Utc::now(),
            sender,
            text,
        }
    }

    /// One-line rendering used in server logs
    ///
    /// ```rust
    /// use chat_feed::shared::Message;
    ///
    /// let message = Message::new(42, "bob".to_string(), "hi".to_string());
    /// assert!(message.summary().starts_with("[000042] "));
    /// assert!(message.summary().ends_with(" bob -> hi"));
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "[{:06}] {} {} -> {}",
            self.id,
            self.timestamp.to_rfc3339(),
            self.sender,
            self.text
        )
    }
}
