/**
 * Server Configuration Loading
 *
 * # Configuration Sources
 *
 * Applied in order, later sources winning:
 * 1. Built-in defaults (`ServerConfig::default()`)
 * 2. A TOML file named by `CHAT_FEED_CONFIG`, if set
 * 3. Environment variables (a `.env` file is loaded first if present):
 *    `SERVER_HOST`, `SERVER_PORT`, `JWT_SECRET`, `TOKEN_TTL_SECS`,
 *    `BCRYPT_COST`, `REQUIRE_AUTH`
 *
 * A malformed value is a `ConfigError` and the server does not start.
 */

use std::path::Path;
use std::str::FromStr;

use crate::shared::config::{ConfigError, FileConfig, ServerConfig};

/// Environment variable naming the TOML config file
pub const CONFIG_FILE_VAR: &str = "CHAT_FEED_CONFIG";

/// Load configuration from defaults, optional file and environment
pub fn load_config() -> Result<ServerConfig, ConfigError> {
    dotenv::dotenv().ok();

    let mut config = ServerConfig::default();

    if let Ok(path) = std::env::var(CONFIG_FILE_VAR) {
        tracing::info!("Loading configuration file {}", path);
        config.apply_file(read_config_file(Path::new(&path))?);
    }

    apply_env(&mut config)?;
    config.validate()?;

    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set; using the development secret");
    }

    Ok(config)
}

/// Read and parse a TOML config file
pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    FileConfig::from_toml(&text)
}

fn apply_env(config: &mut ServerConfig) -> Result<(), ConfigError> {
    if let Ok(host) = std::env::var("SERVER_HOST") {
        config.host = host;
    }
    if let Some(port) = env_parse("SERVER_PORT")? {
        config.port = port;
    }
    if let Ok(secret) = std::env::var("JWT_SECRET") {
        config.jwt_secret = secret;
    }
    if let Some(ttl) = env_parse("TOKEN_TTL_SECS")? {
        config.token_ttl_secs = ttl;
    }
    if let Some(cost) = env_parse("BCRYPT_COST")? {
        config.bcrypt_cost = cost;
    }
    if let Some(require_auth) = env_parse("REQUIRE_AUTH")? {
        config.require_auth = require_auth;
    }
    Ok(())
}

fn env_parse<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}
