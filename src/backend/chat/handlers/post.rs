/**
 * Post Message Handler
 *
 * `POST /message` appends a message to the log and answers `201` with the
 * assigned id.
 *
 * # Request Body
 *
 * Fields `sender` and `text`, sent as any of:
 * - `application/json`
 * - `application/x-www-form-urlencoded`
 * - `multipart/form-data` (what a browser `FormData` produces)
 *
 * # Authentication
 *
 * With a valid bearer token the sender is the authenticated user's name and
 * any `sender` field is ignored. An invalid or revoked token is rejected
 * with 401. Without a token the request is anonymous, which is refused when
 * the server runs with `require_auth`.
 *
 * # Example Request
 *
 * ```http
 * POST /message HTTP/1.1
 * Content-Type: application/json
 *
 * {"sender":"alice","text":"hello"}
 * ```
 *
 * # Example Response
 *
 * ```http
 * HTTP/1.1 201 Created
 *
 * {"id":0,"timestamp":"2024-01-01T00:00:00Z"}
 * ```
 */

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Json,
    Form,
};

use crate::backend::auth::sessions::bearer_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::{
    check_length, Created, Envelope, PostMessageRequest, MAX_SENDER_LENGTH, MAX_TEXT_LENGTH,
};

/// Message fields decoded from whichever body encoding the client used
#[derive(Debug)]
pub struct MessageForm(pub PostMessageRequest);

impl<S> FromRequest<S> for MessageForm
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<PostMessageRequest>::from_request(req, state)
                .await
                .map_err(|e| BackendError::validation("body", e.body_text()))?;
            Ok(Self(body))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<PostMessageRequest>::from_request(req, state)
                .await
                .map_err(|e| BackendError::validation("body", e.body_text()))?;
            Ok(Self(body))
        } else if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| BackendError::validation("body", e.body_text()))?;
            read_multipart(multipart).await.map(Self)
        } else if content_type.is_empty() {
            Ok(Self(PostMessageRequest::default()))
        } else {
            Err(BackendError::validation(
                "body",
                format!("Unsupported content type: {}", content_type),
            ))
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<PostMessageRequest, BackendError> {
    let mut body = PostMessageRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BackendError::validation("body", e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        let value = field
            .text()
            .await
            .map_err(|e| BackendError::validation("body", e.body_text()))?;

        match name.as_deref() {
            Some("sender") => body.sender = Some(value),
            Some("text") => body.text = Some(value),
            _ => {}
        }
    }

    Ok(body)
}

/// Handle `POST /message`
///
/// # Errors
///
/// * `400 Bad Request` - empty, missing or oversized sender/text, undecodable body
/// * `401 Unauthorized` - invalid token, or no token under `require_auth`
/// * `500 Internal Server Error` - log unavailable
pub async fn post_message(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    MessageForm(request): MessageForm,
) -> Result<(StatusCode, Json<Envelope<Created>>), BackendError> {
    let sender = if bearer_token(&headers).is_some() {
        let user_id = app_state
            .services
            .auth
            .authenticate(&headers)
            .ok_or_else(|| BackendError::auth("Unauthorized"))?;

        let user = app_state.services.users.get(user_id)?.ok_or_else(|| {
            tracing::warn!("Token names unknown user {}", user_id);
            BackendError::auth("Unauthorized")
        })?;
        user.name
    } else if app_state.config.require_auth {
        tracing::warn!("Anonymous POST /message rejected");
        return Err(BackendError::auth("Unauthorized"));
    } else {
        request.sender.unwrap_or_default()
    };

    let text = request.text.unwrap_or_default();
    check_length("sender", &sender, MAX_SENDER_LENGTH)?;
    check_length("text", &text, MAX_TEXT_LENGTH)?;

    let id = app_state.log.append(&sender, &text)?;

    Ok((StatusCode::CREATED, Json(Envelope::new(Created { id }))))
}
