/**
 * Chat Feed HTTP Client
 *
 * Async client for the feed protocol. It keeps the reader's cursor and the
 * bearer token between calls, so a caller only has to `poll()` in a loop.
 *
 * ```rust,no_run
 * use chat_feed::client::ChatClient;
 *
 * # async fn example() -> Result<(), chat_feed::client::ClientError> {
 * let mut client = ChatClient::new("http://127.0.0.1:8080");
 * client.post_message("alice", "hi").await?;
 * for message in client.poll().await? {
 *     println!("{}", message.summary());
 * }
 * # Ok(())
 * # }
 * ```
 */

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api::{
    Created, CreateUserRequest, Envelope, ErrorBody, FeedPage, LoginRequest, LogoutBody,
    PostMessageRequest, TokenBody, UserBody, UserId, UserView,
};
use crate::shared::feed::FeedCursor;
use crate::shared::message::{Message, MessageId};

/// Client-side failures
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("Request failed: {status} - {error}")]
    Api { status: StatusCode, error: String },

    /// The call needs a token and none is held
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ClientError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            ClientError::NotAuthenticated => None,
        }
    }
}

/// Polling client holding a feed cursor and an optional bearer token
#[derive(Debug, Clone)]
pub struct ChatClient {
    base_url: String,
    client: Client,
    token: Option<String>,
    cursor: FeedCursor,
}

impl ChatClient {
    /// Create a client for the server at `base_url`, starting from message 0
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client,
            token: None,
            cursor: FeedCursor::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Id of the next message this client has not seen
    pub fn cursor(&self) -> MessageId {
        self.cursor.position()
    }

    /// Restart polling from `next`
    pub fn seek(&mut self, next: MessageId) {
        self.cursor = FeedCursor::at(next);
    }

    /// Bearer token from the last login, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replace the held bearer token, or clear it with `None`
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Post a message and return its id
    ///
    /// When a token is held the server uses the logged-in user's name and
    /// ignores `sender`.
    pub async fn post_message(&self, sender: &str, text: &str) -> Result<MessageId, ClientError> {
        let body = PostMessageRequest {
            sender: Some(sender.to_string()),
            text: Some(text.to_string()),
        };
        let request = self.authorized(self.client.post(self.url("/message")).json(&body));
        let created: Envelope<Created> = send(request).await?;
        Ok(created.body.id)
    }

    /// Fetch every message at or after the cursor and advance past them
    pub async fn poll(&mut self) -> Result<Vec<Message>, ClientError> {
        let url = self.url(&format!("/message/{}", self.cursor.position()));
        let page: Envelope<FeedPage> = send(self.client.get(url)).await?;
        let messages = page.body.messages;
        self.cursor.advance(&messages);
        tracing::debug!(
            "Polled {} message(s), cursor now {}",
            messages.len(),
            self.cursor.position()
        );
        Ok(messages)
    }

    /// Fetch the suffix starting at `cursor` without touching the client's cursor
    pub async fn fetch_from(&self, cursor: MessageId) -> Result<Vec<Message>, ClientError> {
        let url = self.url(&format!("/message/{}", cursor));
        let page: Envelope<FeedPage> = send(self.client.get(url)).await?;
        Ok(page.body.messages)
    }

    /// Register a user and return the new id
    pub async fn create_user(&self, name: &str, password: &str) -> Result<UserId, ClientError> {
        let body = CreateUserRequest {
            name: name.to_string(),
            password: password.to_string(),
        };
        let created: Envelope<Created> =
            send(self.client.post(self.url("/user")).json(&body)).await?;
        Ok(created.body.id)
    }

    /// Log in and keep the issued token for later calls
    pub async fn login(&mut self, user_id: UserId, password: &str) -> Result<String, ClientError> {
        let body = LoginRequest {
            password: password.to_string(),
        };
        let url = self.url(&format!("/auth/{}", user_id));
        let issued: Envelope<TokenBody> = send(self.client.post(url).json(&body)).await?;
        self.token = Some(issued.body.token.clone());
        Ok(issued.body.token)
    }

    /// End the session and drop the held token
    pub async fn logout(&mut self, user_id: UserId) -> Result<bool, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        let url = self.url(&format!("/auth/{}", user_id));
        let outcome: Envelope<LogoutBody> = send(self.authorized(self.client.delete(url))).await?;
        self.token = None;
        Ok(outcome.body.result)
    }

    /// Look up a user (requires a token)
    pub async fn get_user(&self, user_id: UserId) -> Result<UserView, ClientError> {
        if self.token.is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        let url = self.url(&format!("/user/{}", user_id));
        let found: Envelope<UserBody> = send(self.authorized(self.client.get(url))).await?;
        Ok(found.body.user)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let error = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        return Err(ClientError::Api { status, error });
    }

    Ok(response.json::<T>().await?)
}
