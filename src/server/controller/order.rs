//! Order resource.
//!
//! Reads of a single order always populate its products. The listing populates them only with
//! `eagerload=true`, and is paged when `page` or `size` is given.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{BadRequestDto, ErrorDto},
        order::OrderDto,
    },
    server::{
        controller::util::crud,
        error::{request::RequestError, Error},
        model::{
            app::AppState,
            page::{PageRequest, DEFAULT_PAGE_SIZE},
        },
        service::{order::OrderService, RecordService},
    },
};

/// OpenAPI tag grouping the order routes
pub static ORDER_TAG: &str = "order";

/// Collection path of the order resource
pub static ORDER_PATH: &str = "/api/orders";

/// Header carrying the number of stored orders on paged reads
pub static TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// Query parameters of the order listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListParams {
    /// Populate each order's products
    #[serde(default)]
    pub eagerload: bool,
    /// Zero-based page index, the listing is paged when either `page` or `size` is present
    pub page: Option<u64>,
    /// Orders per page, defaults to 20 and must be greater than zero
    pub size: Option<u64>,
}

impl OrderListParams {
    /// Page requested by the client, `Ok(None)` for an unpaged listing.
    pub fn page_request(&self) -> Result<Option<PageRequest>, RequestError> {
        if self.page.is_none() && self.size.is_none() {
            return Ok(None);
        }

        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(RequestError::InvalidPageSize {
                entity: OrderService::ENTITY_NAME,
            });
        }

        Ok(Some(PageRequest {
            page: self.page.unwrap_or(0),
            size,
        }))
    }
}

/// Create a new order and link it to the listed products
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = OrderDto,
    responses(
        (status = 201, description = "Order created, `Location` points at the new order", body = OrderDto),
        (status = 400, description = "The order already has an ID or a listed product has none", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(order): Json<OrderDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to save order: {:?}", order);

    crud::create::<OrderService, _>(&state.db, ORDER_PATH, order).await
}

/// Update an existing order, its products become exactly the listed products
#[utoipa::path(
    put,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = OrderDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "The order or a listed product has no ID", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    Json(order): Json<OrderDto>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to update order: {:?}", order);

    crud::update::<OrderService, _>(&state.db, order).await
}

/// Get every order, optionally paged and with products populated
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(OrderListParams),
    responses(
        (status = 200, description = "Stored orders, `X-Total-Count` is set on paged reads", body = Vec<OrderDto>),
        (status = 400, description = "Invalid page size", body = BadRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get all orders: {:?}", params);

    let order_service = OrderService::new(&state.db);

    let Some(page) = params.page_request()? else {
        let orders = if params.eagerload {
            order_service.get_all_with_products(None).await?.0
        } else {
            order_service.get_all().await?
        };

        return Ok((StatusCode::OK, Json(orders)).into_response());
    };

    let (orders, total) = if params.eagerload {
        order_service.get_all_with_products(Some(page)).await?
    } else {
        order_service.get_page(page).await?
    };

    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER.clone(), HeaderValue::from(total));

    Ok((StatusCode::OK, headers, Json(orders)).into_response())
}

/// Get an order by ID with its products
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i64, Path, description = "ID of the order")),
    responses(
        (status = 200, description = "The order with its products", body = OrderDto),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to get order: {}", id);

    crud::get::<OrderService, _>(&state.db, id).await
}

/// Delete an order by ID along with its product links
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i64, Path, description = "ID of the order")),
    responses(
        (status = 200, description = "Order deleted or did not exist"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    tracing::debug!("REST request to delete order: {}", id);

    crud::delete::<OrderService>(&state.db, id).await
}
