/**
 * Feed Handlers
 *
 * Read side of the message log.
 *
 * - `GET /message/{cursor}` - every message with `id >= cursor`
 * - `GET /message?last={cursor}` - same, cursor in the query (defaults to 0)
 * - `GET /messages/{id}` - a single message
 *
 * A cursor at or past the end of the log is not an error; the response
 * simply carries an empty `messages` array. Negative cursors clamp to 0.
 */

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};

use crate::backend::chat::log::MessageLog;
use crate::backend::error::BackendError;
use crate::shared::api::{Envelope, FeedPage, FeedQuery, MessageBody};
use crate::shared::{parse_cursor, parse_id, MessageId};

/// Handle `GET /message/{cursor}`
pub async fn get_feed(
    State(log): State<Arc<MessageLog>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<FeedPage>>, BackendError> {
    let Path(cursor) = path?;
    let cursor = parse_cursor(&cursor)?;
    read_page(&log, cursor)
}

/// Handle `GET /message?last={cursor}`
pub async fn get_feed_query(
    State(log): State<Arc<MessageLog>>,
    query: Result<Query<FeedQuery>, QueryRejection>,
) -> Result<Json<Envelope<FeedPage>>, BackendError> {
    let Query(query) = query.map_err(|e| BackendError::validation("last", e.body_text()))?;
    let cursor = match query.last.as_deref() {
        Some(raw) => parse_cursor(raw)?,
        None => 0,
    };
    read_page(&log, cursor)
}

/// Handle `GET /messages/{id}`
pub async fn get_message(
    State(log): State<Arc<MessageLog>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<MessageBody>>, BackendError> {
    let Path(id) = path?;
    let id = parse_id(&id, "id", "Invalid message index")?;
    let message = log
        .get(id)?
        .ok_or_else(|| BackendError::not_found("Message not found"))?;
    Ok(Json(Envelope::new(MessageBody { message })))
}

fn read_page(log: &MessageLog, cursor: MessageId) -> Result<Json<Envelope<FeedPage>>, BackendError> {
    let messages = log.read_from(cursor)?;
    tracing::debug!("Returning {} messages from {}", messages.len(), cursor);
    Ok(Json(Envelope::new(FeedPage { messages })))
}
