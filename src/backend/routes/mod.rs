//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and shared layers
//! ├── chat_routes.rs  - Message posting and feed routes
//! └── api_routes.rs   - User, auth and health routes
//! ```
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | GET | `/health` | no |
//! | POST | `/message` | optional |
//! | GET | `/message?last=N` | no |
//! | GET | `/message/{cursor}` | no |
//! | GET | `/messages/{id}` | no |
//! | POST | `/user` | no |
//! | GET | `/user/{id}` | bearer |
//! | POST | `/auth/{id}` | no |
//! | DELETE | `/auth/{id}` | bearer |

/// Main router creation
pub mod router;

/// Message routes
pub mod chat_routes;

/// User and auth routes
pub mod api_routes;

pub use router::create_router;
