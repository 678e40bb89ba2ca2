//! Authentication Handlers Module
//!
//! HTTP handlers for user registration and sessions.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── register.rs  - POST /user
//! ├── user.rs      - GET /user/{id}
//! ├── login.rs     - POST /auth/{id}
//! └── logout.rs    - DELETE /auth/{id}
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name and password → user created → id returned
//! 2. **Login**: id and password → credentials verified → token returned
//! 3. **Authenticated calls**: `Authorization: Bearer <token>`
//! 4. **Logout**: token's session ends; the token stops working

use crate::backend::error::BackendError;
use crate::shared::api::UserId;
use crate::shared::parse_id;

pub mod register;

pub mod user;

pub mod login;

pub mod logout;

pub use register::create_user;
pub use user::get_user;
pub use login::login;
pub use logout::logout;

/// Parse the `{id}` path segment of the user and auth routes
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, BackendError> {
    Ok(parse_id(raw, "id", "Invalid user id")?)
}
