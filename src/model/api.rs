use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request is rejected as a client error
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BadRequestDto {
    /// Human readable description of the rejection
    pub title: String,
    /// Name of the entity the request targeted, e.g. `point`
    pub entity_name: String,
    /// Short reason code, e.g. `idexists` or `idnull`
    pub error_key: String,
}
