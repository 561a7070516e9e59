//! Client errors.
//!
//! A rejected request answers 400 with a [`BadRequestDto`] body and the failure alert headers,
//! so clients can tell the reason apart by `errorKey` without parsing the title.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::BadRequestDto, server::util::alert::failure_alert};

/// Requests rejected before reaching storage.
#[derive(Error, Debug)]
pub enum RequestError {
    /// A create request carried an identity
    #[error("A new {entity} cannot already have an ID")]
    IdExists {
        /// Entity of the rejected record
        entity: &'static str,
    },
    /// An update request, or a product listed in an order, had no identity
    #[error("Invalid id: updating a {entity} requires an ID")]
    IdNull {
        /// Entity of the record missing its identity
        entity: &'static str,
    },
    /// A paged read asked for zero records per page
    #[error("Invalid page size for {entity}: page size must be greater than zero")]
    InvalidPageSize {
        /// Entity being listed
        entity: &'static str,
    },
}

impl RequestError {
    /// Short reason code reported to the client.
    pub fn error_key(&self) -> &'static str {
        match self {
            Self::IdExists { .. } => "idexists",
            Self::IdNull { .. } => "idnull",
            Self::InvalidPageSize { .. } => "invalidpagesize",
        }
    }

    /// Name of the entity the rejected request targeted.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::IdExists { entity }
            | Self::IdNull { entity }
            | Self::InvalidPageSize { entity } => entity,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!(
            entity = %self.entity(),
            error_key = %self.error_key(),
            "{}",
            self
        );

        (
            StatusCode::BAD_REQUEST,
            failure_alert(self.entity(), self.error_key()),
            Json(BadRequestDto {
                title: self.to_string(),
                entity_name: self.entity().to_string(),
                error_key: self.error_key().to_string(),
            }),
        )
            .into_response()
    }
}
