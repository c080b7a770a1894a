//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `CLIENTELE_DATABASE_URL` - `SQLite` connection URL (falls back to the
//!   generic `DATABASE_URL`, then to `sqlite:clientele.db`)
//! - `CLIENTELE_HOST` - Bind address (default: 127.0.0.1)
//! - `CLIENTELE_PORT` - Listen port (default: 8080)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Database URL used when none is configured.
const DEFAULT_DATABASE_URL: &str = "sqlite:clientele.db";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `SQLite` database connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url();
        let host = get_env_or_default("CLIENTELE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CLIENTELE_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("CLIENTELE_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CLIENTELE_PORT".to_string(), e.to_string())
            })?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get the database URL, falling back to the generic `DATABASE_URL` and
/// finally to an on-disk file in the working directory.
fn get_database_url() -> String {
    std::env::var("CLIENTELE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
    }
}
