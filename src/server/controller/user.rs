//! Shop user resource.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BadRequestDto, ErrorDto},
        user::UserDto,
    },
    server::{
        controller::util::crud,
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag grouping the user routes
pub static USER_TAG: &str = "user";

/// Collection path of the user resource
pub static USER_PATH: &str = "/api/users";

/// Create a new shop user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UserDto,
    responses(
        (status = 201, description = "User created, `Location` points at the new user", body = UserDto),
        (status = 400, description = "The user already has an ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<UserDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to save user: {:?}", user);

    crud::create::<UserService, _>(&state.db, USER_PATH, user).await
}

/// Update an existing shop user
#[utoipa::path(
    put,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "The user has no ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(user): Json<UserDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to update user: {:?}", user);

    crud::update::<UserService, _>(&state.db, user).await
}

/// Get every shop user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every stored user", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get all users");

    crud::list::<UserService, _>(&state.db).await
}

/// Get a shop user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get user: {}", id);

    crud::get::<UserService, _>(&state.db, id).await
}

/// Delete a shop user by ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i64, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User deleted or did not exist"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to delete user: {}", id);

    crud::delete::<UserService>(&state.db, id).await
}
