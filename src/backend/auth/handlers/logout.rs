/**
 * Logout Handler
 *
 * `DELETE /auth/{id}` ends the user's session. The route sits behind
 * `auth_middleware`, and a user may only end their own session.
 */

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};

use crate::backend::auth::handlers::parse_user_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::Services;
use crate::shared::api::{Envelope, LogoutBody};

pub async fn logout(
    State(services): State<Services>,
    AuthUser(user): AuthUser,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<LogoutBody>>, BackendError> {
    let Path(id) = path?;
    let id = parse_user_id(&id)?;

    if user.user_id != id {
        tracing::warn!("User {} tried to log out user {}", user.user_id, id);
        return Err(BackendError::auth("Unauthorized"));
    }

    if !services.auth.logout(id) {
        return Err(BackendError::not_found("User not found"));
    }

    Ok(Json(Envelope::new(LogoutBody { result: true })))
}
