/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400,
 *   "timestamp": "2024-01-01T00:00:00Z"
 * }
 * ```
 *
 * Path extraction failures are converted here too, so a malformed path
 * segment gets the same JSON body as every other client error.
 */

use axum::extract::rejection::PathRejection;
use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::BackendError;
use crate::shared::api::{Envelope, ErrorBody};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = Envelope::new(ErrorBody {
            error: self.message(),
            status: status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        BackendError::validation("path", rejection.body_text())
    }
}
