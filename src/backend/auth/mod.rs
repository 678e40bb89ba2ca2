//! Authentication Module
//!
//! User registration, password login and token sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model, UserService trait, in-memory store
//! ├── sessions.rs     - JWT creation and validation
//! ├── service.rs      - AuthService trait and token implementation
//! └── handlers/       - HTTP handlers
//! ```
//!
//! The controllers only see the `UserService` and `AuthService` traits,
//! bundled in `server::state::Services`, so either can be swapped without
//! touching the handlers.
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs that also name a server-side session
//! - Invalid credentials return 401 (no information leakage)

pub mod users;

pub mod sessions;

pub mod service;

pub mod handlers;

pub use users::{InMemoryUserService, User, UserService};
pub use service::{AuthService, TokenAuthService};
pub use handlers::{create_user, get_user, login, logout};
