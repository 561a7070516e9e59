//! Server configuration.

use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, Error};

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Server configuration read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// SeaORM connection string, from `DATABASE_URL`
    pub database_url: String,
    /// Address the HTTP listener binds to, from `LISTEN_ADDR`
    pub listen_addr: SocketAddr,
    /// Whether SQL statements are logged, from `SQLX_LOGGING`
    pub sqlx_logging: bool,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(Error::ConfigError)` - A required variable is missing or a value failed to parse
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let listen_addr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let sqlx_logging = match lookup("SQLX_LOGGING") {
            None => false,
            Some(value) => value
                .parse::<bool>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "SQLX_LOGGING".to_string(),
                    reason: e.to_string(),
                })?,
        };

        Ok(Self {
            database_url,
            listen_addr,
            sqlx_logging,
        })
    }
}
