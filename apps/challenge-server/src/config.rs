//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Secret used to sign and verify credentials.
    pub jwt_secret: String,
    /// JWT expiration in hours.
    pub jwt_expiration_hours: u64,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let jwt_secret = var("CHALLENGE_JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("CHALLENGE_JWT_SECRET is required"))?;

        Ok(Self {
            host: var("CHALLENGE_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("CHALLENGE_SERVER_PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(5000),
            jwt_secret,
            jwt_expiration_hours: var("CHALLENGE_JWT_EXPIRATION_HOURS")
                .and_then(|hours| hours.parse().ok())
                .unwrap_or(auth::DEFAULT_JWT_EXPIRATION_HOURS),
            log_level: var("CHALLENGE_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
