/**
 * Authentication Service
 *
 * The `AuthService` interface consulted by the controllers and its
 * token-based implementation.
 *
 * # Sessions
 *
 * Each user has at most one active session. Logging in starts a new session
 * (revoking the previous token); logging out ends it. A token is accepted only
 * while its `jti` matches the user's active session, so logout takes effect
 * immediately even though the JWT itself has not expired.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::http::HeaderMap;
use bcrypt::verify;
use uuid::Uuid;

use crate::backend::auth::sessions::{bearer_token, create_token, verify_token, TokenKeys};
use crate::backend::auth::users::UserService;
use crate::backend::error::BackendError;
use crate::shared::api::UserId;
use crate::shared::SharedError;

pub trait AuthService: Send + Sync {
    /// User id carried by the request's bearer token, if it is valid
    fn authenticate(&self, headers: &HeaderMap) -> Option<UserId>;

    /// Check the password and issue a token for a new session
    fn login(&self, id: UserId, password: &str) -> Result<String, BackendError>;

    /// End the user's session; false if there was none
    fn logout(&self, id: UserId) -> bool;
}

pub struct TokenAuthService {
    users: Arc<dyn UserService>,
    keys: TokenKeys,
    sessions: Mutex<HashMap<UserId, Uuid>>,
}

impl TokenAuthService {
    pub fn new(users: Arc<dyn UserService>, keys: TokenKeys) -> Self {
        Self {
            users,
            keys,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    // Every critical section is a single insert, remove or lookup, so the
    // map is consistent even if a holder panicked.
    fn sessions(&self) -> MutexGuard<'_, HashMap<UserId, Uuid>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuthService for TokenAuthService {
    fn authenticate(&self, headers: &HeaderMap) -> Option<UserId> {
        let token = bearer_token(headers)?;

        let claims = verify_token(&self.keys, token)
            .map_err(|e| tracing::warn!("Invalid token: {:?}", e))
            .ok()?;

        let (user_id, session_id) = match (claims.user_id(), claims.session_id()) {
            (Some(user_id), Some(session_id)) => (user_id, session_id),
            _ => {
                tracing::warn!("Malformed claims in token: sub={} jti={}", claims.sub, claims.jti);
                return None;
            }
        };

        if self.sessions().get(&user_id) != Some(&session_id) {
            tracing::warn!("Token for user {} refers to an inactive session", user_id);
            return None;
        }

        Some(user_id)
    }

    fn login(&self, id: UserId, password: &str) -> Result<String, BackendError> {
        if password.is_empty() {
            return Err(SharedError::validation("password", "Empty password").into());
        }

        let user = self.users.get(id)?.ok_or_else(|| {
            tracing::warn!("Login for unknown user: {}", id);
            BackendError::auth("Invalid credentials")
        })?;

        let valid = verify(password, &user.password_hash).map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal("password verification failed")
        })?;

        if !valid {
            tracing::warn!("Invalid password for user: {}", id);
            return Err(BackendError::auth("Invalid credentials"));
        }

        let session_id = Uuid::new_v4();
        let token = create_token(&self.keys, id, session_id).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal("failed to create token")
        })?;

        self.sessions().insert(id, session_id);
        tracing::info!("User logged in: {} ({})", id, user.name);

        Ok(token)
    }

    fn logout(&self, id: UserId) -> bool {
        let ended = self.sessions().remove(&id).is_some();
        if ended {
            tracing::info!("User logged out: {}", id);
        }
        ended
    }
}
