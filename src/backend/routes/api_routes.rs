/**
 * User and Auth Route Handlers
 *
 * # Routes
 *
 * - `POST /user` - Register a user (public)
 * - `GET /user/{id}` - Get a user (requires authentication)
 * - `POST /auth/{id}` - Log in (public)
 * - `DELETE /auth/{id}` - Log out (requires authentication)
 * - `GET /health` - Liveness and message count (public)
 */

use axum::{
    extract::State,
    middleware::from_fn_with_state,
    response::Json,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::handlers::{create_user, get_user, login, logout};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::shared::api::{Envelope, HealthBody};

/// Configure user, auth and health routes
///
/// Protected routes get `auth_middleware` as a route layer, so it runs
/// only for the methods that need it.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let require_auth = || from_fn_with_state(app_state.clone(), auth_middleware);

    router
        .route("/health", get(health))
        .route("/user", post(create_user))
        .route("/user/{id}", get(get_user).route_layer(require_auth()))
        .route(
            "/auth/{id}",
            post(login).merge(delete(logout).route_layer(require_auth())),
        )
}

async fn health(State(app_state): State<AppState>) -> Result<Json<Envelope<HealthBody>>, BackendError> {
    Ok(Json(Envelope::new(HealthBody {
        status: "ok".to_string(),
        messages: app_state.log.len()?,
    })))
}
