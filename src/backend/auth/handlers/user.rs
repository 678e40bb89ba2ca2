/**
 * Get User Handler
 *
 * `GET /user/{id}` returns the public view of a user. Requires a valid
 * bearer token (enforced by `auth_middleware`); any authenticated user may
 * look up any other user.
 */

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};

use crate::backend::auth::handlers::parse_user_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::Services;
use crate::shared::api::{Envelope, UserBody};

pub async fn get_user(
    State(services): State<Services>,
    AuthUser(caller): AuthUser,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<UserBody>>, BackendError> {
    let Path(id) = path?;
    let id = parse_user_id(&id)?;
    tracing::debug!("User {} looking up user {}", caller.user_id, id);

    let user = services
        .users
        .get(id)?
        .ok_or_else(|| BackendError::not_found("User not found"))?;

    Ok(Json(Envelope::new(UserBody { user: user.view() })))
}
