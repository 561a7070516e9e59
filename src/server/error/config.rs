//! Configuration errors raised while reading the environment.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Environment configuration failures, reported as 500 when they reach a response.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but its value failed to parse
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Parse failure
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
