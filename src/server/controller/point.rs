//! Time-tracking point resource.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BadRequestDto, ErrorDto},
        point::PointDto,
    },
    server::{
        controller::util::crud,
        error::Error,
        model::app::AppState,
        service::point::PointService,
    },
};

/// OpenAPI tag grouping the point routes
pub static POINT_TAG: &str = "point";

/// Collection path of the point resource
pub static POINT_PATH: &str = "/api/points";

/// Create a new time-tracking point
#[utoipa::path(
    post,
    path = "/api/points",
    tag = POINT_TAG,
    request_body = PointDto,
    responses(
        (status = 201, description = "Point created, `Location` points at the new point", body = PointDto),
        (status = 400, description = "The point already has an ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_point(
    State(state): State<AppState>,
    Json(point): Json<PointDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to save point: {:?}", point);

    crud::create::<PointService, _>(&state.db, POINT_PATH, point).await
}

/// Update an existing time-tracking point
#[utoipa::path(
    put,
    path = "/api/points",
    tag = POINT_TAG,
    request_body = PointDto,
    responses(
        (status = 200, description = "Point updated", body = PointDto),
        (status = 400, description = "The point has no ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_point(
    State(state): State<AppState>,
    Json(point): Json<PointDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to update point: {:?}", point);

    crud::update::<PointService, _>(&state.db, point).await
}

/// Get every time-tracking point
#[utoipa::path(
    get,
    path = "/api/points",
    tag = POINT_TAG,
    responses(
        (status = 200, description = "Every stored point", body = Vec<PointDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_points(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get all points");

    crud::list::<PointService, _>(&state.db).await
}

/// Get a time-tracking point by ID
#[utoipa::path(
    get,
    path = "/api/points/{id}",
    tag = POINT_TAG,
    params(("id" = i64, Path, description = "ID of the point")),
    responses(
        (status = 200, description = "The point", body = PointDto),
        (status = 404, description = "Point not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_point(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get point: {}", id);

    crud::get::<PointService, _>(&state.db, id).await
}

/// Delete a time-tracking point by ID
#[utoipa::path(
    delete,
    path = "/api/points/{id}",
    tag = POINT_TAG,
    params(("id" = i64, Path, description = "ID of the point")),
    responses(
        (status = 200, description = "Point deleted or did not exist"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_point(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to delete point: {}", id);

    crud::delete::<PointService>(&state.db, id).await
}
