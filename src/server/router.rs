//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// For each resource in `categories`, `products`, `orders`, `users` and `points`:
/// - `POST /api/{resource}` - Create a record, rejected when it already has an ID
/// - `PUT /api/{resource}` - Update a record, rejected when it has no ID
/// - `GET /api/{resource}` - List every record
/// - `GET /api/{resource}/{id}` - Get one record, 404 when missing
/// - `DELETE /api/{resource}/{id}` - Delete one record
///
/// `GET /api/orders` additionally accepts `eagerload`, `page` and `size`.
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is served
/// at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready for `with_state`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Candy Shop", description = "Candy shop API"), tags(
        (name = controller::category::CATEGORY_TAG, description = "Product category API routes"),
        (name = controller::product::PRODUCT_TAG, description = "Product API routes"),
        (name = controller::order::ORDER_TAG, description = "Order API routes"),
        (name = controller::user::USER_TAG, description = "Shop user API routes"),
        (name = controller::point::POINT_TAG, description = "Time-tracking point API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::category::create_category,
            controller::category::update_category,
            controller::category::get_all_categories
        ))
        .routes(routes!(
            controller::category::get_category,
            controller::category::delete_category
        ))
        .routes(routes!(
            controller::product::create_product,
            controller::product::update_product,
            controller::product::get_all_products
        ))
        .routes(routes!(
            controller::product::get_product,
            controller::product::delete_product
        ))
        .routes(routes!(
            controller::order::create_order,
            controller::order::update_order,
            controller::order::get_all_orders
        ))
        .routes(routes!(
            controller::order::get_order,
            controller::order::delete_order
        ))
        .routes(routes!(
            controller::user::create_user,
            controller::user::update_user,
            controller::user::get_all_users
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::point::create_point,
            controller::point::update_point,
            controller::point::get_all_points
        ))
        .routes(routes!(
            controller::point::get_point,
            controller::point::delete_point
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
