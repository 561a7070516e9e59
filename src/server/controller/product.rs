//! Product resource, deleting a product removes it from every order.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BadRequestDto, ErrorDto},
        product::ProductDto,
    },
    server::{
        controller::util::crud,
        error::Error,
        model::app::AppState,
        service::product::ProductService,
    },
};

/// OpenAPI tag grouping the product routes
pub static PRODUCT_TAG: &str = "product";

/// Collection path of the product resource
pub static PRODUCT_PATH: &str = "/api/products";

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created, `Location` points at the new product", body = ProductDto),
        (status = 400, description = "The product already has an ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<ProductDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to save product: {:?}", product);

    crud::create::<ProductService, _>(&state.db, PRODUCT_PATH, product).await
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "The product has no ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Json(product): Json<ProductDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to update product: {:?}", product);

    crud::update::<ProductService, _>(&state.db, product).await
}

/// Get every product
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Every stored product", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_products(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get all products");

    crud::list::<ProductService, _>(&state.db).await
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i64, Path, description = "ID of the product")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get product: {}", id);

    crud::get::<ProductService, _>(&state.db, id).await
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i64, Path, description = "ID of the product")),
    responses(
        (status = 200, description = "Product deleted or did not exist"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to delete product: {}", id);

    crud::delete::<ProductService>(&state.db, id).await
}
