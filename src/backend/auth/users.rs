/**
 * User Model and Store
 *
 * This module defines the user record and the `UserService` interface the
 * controllers consume, plus an in-memory implementation. Users get dense
 * numeric ids starting at 0; passwords are stored as bcrypt hashes.
 */

use std::sync::RwLock;

use bcrypt::hash;
use chrono::{DateTime, Utc};

use crate::backend::error::BackendError;
use crate::shared::api::{check_length, UserId, UserView, MAX_SENDER_LENGTH};
use crate::shared::SharedError;

/// Registered user
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view without the password hash
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            name: self.name.clone(),
            created: self.created_at,
        }
    }
}

/// User registry consulted by the controllers
pub trait UserService: Send + Sync {
    /// Register a user, returning the new id
    fn create(&self, name: &str, password: &str) -> Result<UserId, BackendError>;

    /// Look up a user by id
    fn get(&self, id: UserId) -> Result<Option<User>, BackendError>;
}

/// `UserService` backed by a vector indexed by id
pub struct InMemoryUserService {
    users: RwLock<Vec<User>>,
    bcrypt_cost: u32,
}

impl InMemoryUserService {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            bcrypt_cost,
        }
    }
}

impl UserService for InMemoryUserService {
    fn create(&self, name: &str, password: &str) -> Result<UserId, BackendError> {
        if name.is_empty() {
            return Err(SharedError::validation("name", "Empty name").into());
        }
        // The name becomes the sender of the user's messages.
        check_length("name", name, MAX_SENDER_LENGTH)?;
        if password.is_empty() {
            return Err(SharedError::validation("password", "Empty password").into());
        }

        // Hash outside the lock.
        let password_hash = hash(password, self.bcrypt_cost).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal("failed to hash password")
        })?;

        let mut users = self
            .users
            .write()
            .map_err(|_| BackendError::state("user store lock poisoned"))?;

        let id = users.len() as UserId;
        users.push(User {
            id,
            name: name.to_string(),
            password_hash,
            created_at: Utc::now(),
        });

        tracing::info!("Created user {} ({})", id, name);
        Ok(id)
    }

    fn get(&self, id: UserId) -> Result<Option<User>, BackendError> {
        let users = self
            .users
            .read()
            .map_err(|_| BackendError::state("user store lock poisoned"))?;

        Ok(usize::try_from(id).ok().and_then(|i| users.get(i)).cloned())
    }
}
