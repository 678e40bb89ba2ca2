//! Server configuration module
//!
//! Provides the configuration type for the chat server, a builder for it,
//! and the TOML file layout it is read from. Environment overrides are
//! applied by `backend::server::config`.

use serde::Deserialize;
use thiserror::Error;

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;
/// Default token lifetime (30 days)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;
/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;

const DEV_JWT_SECRET: &str = "chat-feed-dev-secret-change-me";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens in seconds
    pub token_ttl_secs: u64,
    /// bcrypt work factor for stored passwords
    pub bcrypt_cost: u32,
    /// Reject anonymous `POST /message` requests
    pub require_auth: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            require_auth: false,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the built-in development secret is still in use
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingValue("host"));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "token_ttl_secs",
                value: "0".to_string(),
            });
        }
        // bcrypt only accepts costs in 4..=31
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "bcrypt_cost",
                value: self.bcrypt_cost.to_string(),
            });
        }
        Ok(())
    }

    /// Overlay values present in a parsed config file
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(secret) = file.jwt_secret {
            self.jwt_secret = secret;
        }
        if let Some(ttl) = file.token_ttl_secs {
            self.token_ttl_secs = ttl;
        }
        if let Some(cost) = file.bcrypt_cost {
            self.bcrypt_cost = cost;
        }
        if let Some(require_auth) = file.require_auth {
            self.require_auth = require_auth;
        }
    }
}

/// On-disk TOML layout; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: Option<u64>,
    pub bcrypt_cost: Option<u32>,
    pub require_auth: Option<bool>,
}

impl FileConfig {
    /// Parse TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn token_ttl_secs(mut self, ttl: u64) -> Self {
        self.config.token_ttl_secs = ttl;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn require_auth(mut self, require: bool) -> Self {
        self.config.require_auth = require;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file: {0}")]
    Io(String),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.uses_dev_secret());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ServerConfig::builder()
            .host("127.0.0.1")
            .port(9000)
            .jwt_secret("s3cret")
            .bcrypt_cost(4)
            .require_auth(true)
            .build()
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.bcrypt_cost, 4);
        assert!(config.require_auth);
        assert!(!config.uses_dev_secret());
    }

    #[test]
    fn test_builder_rejects_bad_cost() {
        let err = ServerConfig::builder().bcrypt_cost(2).build().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "bcrypt_cost",
                value: "2".to_string()
            }
        );
    }

    #[test]
    fn test_builder_rejects_empty_secret() {
        let err = ServerConfig::builder().jwt_secret("").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("jwt_secret"));
    }

    #[test]
    fn test_file_overlay() {
        let file = FileConfig::from_toml("port = 3000\nrequire_auth = true\n").unwrap();
        let mut config = ServerConfig::default();
        config.apply_file(file);
        assert_eq!(config.port, 3000);
        assert!(config.require_auth);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_file_rejects_unknown_keys() {
        assert!(matches!(
            FileConfig::from_toml("prot = 3000\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
