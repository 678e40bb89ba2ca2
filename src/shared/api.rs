/**
 * API Envelopes
 *
 * Request and response bodies exchanged over HTTP. Every response carries
 * a `timestamp` set when the response is generated; the payload fields sit
 * beside it at the top level of the JSON object.
 *
 * ```json
 * { "id": 3, "timestamp": "2024-01-01T00:00:00Z" }
 * { "error": "Empty sender", "status": 400, "timestamp": "2024-01-01T00:00:00Z" }
 * ```
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::message::Message;

/// Numeric user identifier
pub type UserId = u64;

/// Response wrapper adding the generation timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(flatten)]
    pub body: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> Envelope<T> {
    /// Wrap a body, stamping it with the current time
    pub fn new(body: T) -> Self {
        Self {
            body,
            timestamp: Utc::now(),
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

/// Body of `POST /message`
///
/// Both fields are optional so a missing field is reported as a validation
/// error rather than a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Query string of `GET /message`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub last: Option<String>,
}

/// Id assigned to a newly created resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Created {
    pub id: u64,
}

/// Result of a feed poll
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedPage {
    pub messages: Vec<Message>,
}

/// A single message looked up by id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    pub message: Message,
}

/// Body of `POST /user`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /auth/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Bearer token issued by a login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenBody {
    pub token: String,
}

/// Outcome of a logout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutBody {
    pub result: bool,
}

/// Public view of a user (never includes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub created: DateTime<Utc>,
}

/// Wrapper for `GET /user/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserBody {
    pub user: UserView,
}

/// Liveness report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthBody {
    pub status: String,
    pub messages: usize,
}

/// Longest `sender` (and user name) the HTTP API accepts, in characters
pub const MAX_SENDER_LENGTH: usize = 100;

/// Longest `text` the HTTP API accepts, in characters
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Reject a request field longer than `max_chars`
///
/// This is a request-size policy of the HTTP API. The message log itself
/// only requires non-empty fields.
pub fn check_length(field: &str, value: &str, max_chars: usize) -> Result<(), SharedError> {
    if value.chars().count() > max_chars {
        return Err(SharedError::validation(
            field,
            format!("{} exceeds {} characters", field, max_chars),
        ));
    }
    Ok(())
}
