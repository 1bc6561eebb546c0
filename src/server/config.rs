//! Server configuration, read once from the environment at startup.

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 80;
const DEFAULT_ENVIRONMENT: &str = "production";

/// Errors raised while reading [`ServerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind, `IBANCHECK_HOST` (default `0.0.0.0`).
    pub host: String,
    /// TCP port, `PORT` (default 80).
    pub port: u16,
    /// Deployment environment, `ENVIRONMENT` (default `production`).
    /// `dev` switches logging to the human-readable format.
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from the process environment; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "PORT".into(),
                message: format!("`{raw}` is not a port number ({e})"),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("IBANCHECK_HOST").unwrap_or(defaults.host),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
        })
    }

    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }
}
