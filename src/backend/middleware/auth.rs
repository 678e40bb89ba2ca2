/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It asks the `AuthService` to authenticate the
 * request's bearer token and provides the user id to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::api::UserId;

/// Authenticated user data extracted from the bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Authenticates the `Authorization: Bearer` token via `AuthService`
/// 2. Attaches the user to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing, invalid or revoked.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user_id = app_state
        .services
        .auth
        .authenticate(request.headers())
        .ok_or_else(|| BackendError::auth("Unauthorized"))?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by `auth_middleware`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::auth("Unauthorized")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn test_extract_authenticated_user() {
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .extension(AuthenticatedUser { user_id: 3 })
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.user_id, 3);
    }

    #[tokio::test]
    async fn test_extract_authenticated_user_missing() {
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status_code().as_u16(), 401);
    }
}
