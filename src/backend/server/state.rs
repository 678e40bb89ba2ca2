/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The message log
 * - The external service capability set (`Services`)
 * - The server configuration
 *
 * # Thread Safety
 *
 * Everything is behind `Arc` and is `Send + Sync`:
 * - `MessageLog` synchronizes internally with a `RwLock`
 * - services are `Arc<dyn Trait>` objects whose implementations lock internally
 *
 * # Example
 *
 * ```rust
 * use chat_feed::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let count = state.log.len();
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::service::{AuthService, TokenAuthService};
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::{InMemoryUserService, UserService};
use crate::backend::chat::log::MessageLog;
use crate::shared::ServerConfig;

/// Collaborating services consulted by the controllers
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UserService>,
}

impl Services {
    /// In-memory users with token sessions signed by the configured secret
    pub fn in_memory(config: &ServerConfig) -> Self {
        let users: Arc<dyn UserService> = Arc::new(InMemoryUserService::new(config.bcrypt_cost));
        let keys = TokenKeys::new(&config.jwt_secret, config.token_ttl_secs);
        let auth: Arc<dyn AuthService> = Arc::new(TokenAuthService::new(users.clone(), keys));
        Self { auth, users }
    }
}

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Append-only message log
    pub log: Arc<MessageLog>,

    /// Auth and user services
    pub services: Services,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let services = Services::in_memory(&config);
        Self::with_services(config, services)
    }

    /// State with caller-supplied service implementations
    pub fn with_services(config: ServerConfig, services: Services) -> Self {
        Self {
            log: Arc::new(MessageLog::new()),
            services,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for Arc<MessageLog> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.log.clone()
    }
}

impl FromRef<AppState> for Services {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.services.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
