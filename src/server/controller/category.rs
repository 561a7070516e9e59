//! Category resource.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BadRequestDto, ErrorDto},
        category::CategoryDto,
    },
    server::{
        controller::util::crud,
        error::Error,
        model::app::AppState,
        service::category::CategoryService,
    },
};

/// OpenAPI tag grouping the category routes
pub static CATEGORY_TAG: &str = "category";

/// Collection path of the category resource
pub static CATEGORY_PATH: &str = "/api/categories";

/// Create a new product category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CategoryDto,
    responses(
        (status = 201, description = "Category created, `Location` points at the new category", body = CategoryDto),
        (status = 400, description = "The category already has an ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(category): Json<CategoryDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to save category: {:?}", category);

    crud::create::<CategoryService, _>(&state.db, CATEGORY_PATH, category).await
}

/// Update an existing product category
#[utoipa::path(
    put,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 400, description = "The category has no ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Json(category): Json<CategoryDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to update category: {:?}", category);

    crud::update::<CategoryService, _>(&state.db, category).await
}

/// Get every product category
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Every stored category", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get all categories");

    crud::list::<CategoryService, _>(&state.db).await
}

/// Get a product category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i64, Path, description = "ID of the category")),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get category: {}", id);

    crud::get::<CategoryService, _>(&state.db, id).await
}

/// Delete a product category by ID
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i64, Path, description = "ID of the category")),
    responses(
        (status = 200, description = "Category deleted or did not exist"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to delete category: {}", id);

    crud::delete::<CategoryService>(&state.db, id).await
}
