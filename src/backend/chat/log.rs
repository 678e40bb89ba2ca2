/**
 * Message Log
 *
 * The append-only, zero-indexed sequence of chat messages. Every message
 * gets its position as its permanent id. Nothing is ever updated or removed.
 *
 * # Concurrency
 *
 * The log owns its storage behind a `RwLock`:
 * - `append` takes the write guard once, reads the length, builds the
 *   message with that id and pushes it. Ids are therefore dense and gap-free
 *   under concurrent writers.
 * - `read_from` takes the read guard only long enough to clone the requested
 *   suffix. Readers never see a half-built message.
 *
 * Neither operation performs I/O while holding the lock.
 */

use std::sync::RwLock;

use crate::backend::error::BackendError;
use crate::shared::{Message, MessageId, SharedError};

/// Append-only message log
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: RwLock<Vec<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, returning the id assigned to it
    ///
    /// Fails with a validation error, leaving the log untouched, if either
    /// field is empty.
    pub fn append(&self, sender: &str, text: &str) -> Result<MessageId, BackendError> {
        require_non_empty("sender", "Empty sender", sender)?;
        require_non_empty("text", "Empty text", text)?;

        let mut messages = self
            .messages
            .write()
            .map_err(|_| BackendError::state("message log lock poisoned"))?;

        let id = messages.len() as MessageId;
        let message = Message::new(id, sender.to_string(), text.to_string());
        let summary = message.summary();
        messages.push(message);
        drop(messages);

        tracing::info!("Received message: {}", summary);
        Ok(id)
    }

    /// Every message with `id >= cursor`, in id order
    ///
    /// A cursor at or past the end yields an empty vector.
    pub fn read_from(&self, cursor: MessageId) -> Result<Vec<Message>, BackendError> {
        let messages = self
            .messages
            .read()
            .map_err(|_| BackendError::state("message log lock poisoned"))?;

        let start = match usize::try_from(cursor) {
            Ok(start) if start < messages.len() => start,
            _ => return Ok(Vec::new()),
        };

        Ok(messages[start..].to_vec())
    }

    /// Look up a single message by id
    pub fn get(&self, id: MessageId) -> Result<Option<Message>, BackendError> {
        let messages = self
            .messages
            .read()
            .map_err(|_| BackendError::state("message log lock poisoned"))?;

        Ok(usize::try_from(id).ok().and_then(|i| messages.get(i)).cloned())
    }

    /// Number of messages in the log
    pub fn len(&self) -> Result<usize, BackendError> {
        self.messages
            .read()
            .map(|messages| messages.len())
            .map_err(|_| BackendError::state("message log lock poisoned"))
    }
}

fn require_non_empty(field: &str, message: &str, value: &str) -> Result<(), SharedError> {
    if value.is_empty() {
        return Err(SharedError::validation(field, message));
    }
    Ok(())
}
