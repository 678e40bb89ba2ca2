/**
 * Server Initialization
 *
 * Builds the application state and the router.
 *
 * # Initialization Process
 *
 * 1. Create the empty message log
 * 2. Create the in-memory user and auth services from the configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
///
/// # Example
///
/// ```rust,no_run
/// use chat_feed::backend::server::init::create_app;
/// use chat_feed::shared::ServerConfig;
///
/// # async fn example() -> std::io::Result<()> {
/// let config = ServerConfig::default();
/// let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
/// axum::serve(listener, create_app(config)).await
/// # }
/// ```
pub fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing chat feed server");
    let app_state = AppState::new(config);
    create_app_with_state(app_state)
}

/// Router over an existing state, for callers that keep a handle on it
pub fn create_app_with_state(app_state: AppState) -> Router<()> {
    tracing::info!(
        "Router configured (require_auth = {})",
        app_state.config.require_auth
    );
    create_router(app_state)
}
