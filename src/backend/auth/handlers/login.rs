/**
 * Login Handler
 *
 * `POST /auth/{id}` checks the user's password and answers `201` with a
 * bearer token for a fresh session.
 *
 * # Security
 *
 * - Unknown ids and wrong passwords both return 401 with the same message
 * - A new login revokes the user's previous token
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::parse_user_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::Services;
use crate::shared::api::{Envelope, LoginRequest, TokenBody};

pub async fn login(
    State(services): State<Services>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<TokenBody>>), BackendError> {
    let Path(id) = path?;
    let id = parse_user_id(&id)?;
    let Json(request) = payload.map_err(|e| BackendError::validation("body", e.body_text()))?;
    tracing::info!("Login request for user: {}", id);

    let token = services.auth.login(id, &request.password)?;

    Ok((StatusCode::CREATED, Json(Envelope::new(TokenBody { token }))))
}
