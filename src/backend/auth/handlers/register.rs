/**
 * User Registration Handler
 *
 * `POST /user` registers a user and answers `201` with the new id.
 *
 * # Validation
 *
 * - `name` must not be empty
 * - `password` must not be empty
 *
 * Passwords are hashed with bcrypt by the `UserService` and never returned.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::Services;
use crate::shared::api::{CreateUserRequest, Created, Envelope};

pub async fn create_user(
    State(services): State<Services>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Created>>), BackendError> {
    let Json(request) = payload.map_err(|e| BackendError::validation("body", e.body_text()))?;
    tracing::info!("Create user request for: {}", request.name);

    let id = services.users.create(&request.name, &request.password)?;

    Ok((StatusCode::CREATED, Json(Envelope::new(Created { id }))))
}
