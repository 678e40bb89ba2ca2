/**
 * Chat Route Handlers
 *
 * # Routes
 *
 * - `POST /message` - Append a message
 * - `GET /message?last=N` - Feed poll, cursor in the query
 * - `GET /message/{cursor}` - Feed poll, cursor in the path
 * - `GET /messages/{id}` - Single message
 */

use axum::{routing::get, Router};

use crate::backend::chat::handlers::{get_feed, get_feed_query, get_message, post_message};
use crate::backend::server::state::AppState;

/// Configure message routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/message", get(get_feed_query).post(post_message))
        .route("/message/{cursor}", get(get_feed))
        .route("/messages/{id}", get(get_message))
}
