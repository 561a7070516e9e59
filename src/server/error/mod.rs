//! Error types for the candy shop server.
//!
//! This module provides the error handling for the server: a single [`Error`] aggregating the
//! domain-specific errors (configuration, rejected requests) and external library errors. All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for their
//! `Display` and `Error` implementations.

pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, request::RequestError},
};

/// Main error type for the candy shop server.
///
/// Uses `thiserror`'s `#[from]` attribute to convert underlying error types via the `?`
/// operator. The `IntoResponse` implementation maps errors to HTTP responses.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Request errors (client supplied an identity where none is allowed or omitted a required one)
/// - Storage errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request rejected as a client error.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For rejected requests, with a [`crate::model::api::BadRequestDto`] body
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
