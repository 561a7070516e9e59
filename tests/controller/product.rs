//! Tests for product controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use candy_shop::{
    model::{api::BadRequestDto, product::ProductDto},
    server::controller::product::{create_product, delete_product, get_product, update_product},
};
use candy_shop_test_utils::constant::{DEFAULT_NAME, DEFAULT_PRICE, DEFAULT_STOCK, UPDATED_NAME};

use super::*;

/// Tests creating a product in a category.
///
/// Expected: 201 Created with the category reference kept
#[tokio::test]
async fn creates_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_category()
        .build()
        .await?;

    let product = ProductDto {
        name: Some(DEFAULT_NAME.to_string()),
        price: Some(DEFAULT_PRICE.to_string()),
        stock: Some(DEFAULT_STOCK),
        category_id: Some(1),
        ..Default::default()
    };
    let result = create_product(State(test.into_app_state()), Json(product)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: ProductDto = body_json(resp).await?;
    assert!(created.id.is_some());
    assert_eq!(created.category_id, Some(1));
    assert_eq!(created.price.as_deref(), Some(DEFAULT_PRICE));
    assert_eq!(test.shop().count(entity::prelude::Product).await?, 1);

    Ok(())
}

/// Tests updating a product.
///
/// Expected: 200 OK with the new name and stock
#[tokio::test]
async fn updates_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_product(None)
        .build()
        .await?;

    let product = ProductDto {
        id: Some(1),
        name: Some(UPDATED_NAME.to_string()),
        stock: Some(0),
        ..Default::default()
    };
    let result = update_product(State(test.into_app_state()), Json(product)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: ProductDto = body_json(resp).await?;
    assert_eq!(updated.name.as_deref(), Some(UPDATED_NAME));
    assert_eq!(updated.stock, Some(0));
    assert_eq!(test.shop().count(entity::prelude::Product).await?, 1);

    Ok(())
}

/// Tests updating a product without an ID.
///
/// Expected: 400 Bad Request with `idnull`
#[tokio::test]
async fn fails_for_product_without_id() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let resp = update_product(State(test.into_app_state()), Json(ProductDto::default()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: BadRequestDto = body_json(resp).await?;
    assert_eq!(body.entity_name, "product");
    assert_eq!(body.error_key, "idnull");

    Ok(())
}

/// Tests deleting a product that belongs to orders.
///
/// Verifies the product disappears from every order while the orders remain.
///
/// Expected: 200 OK, no links left for the product
#[tokio::test]
async fn deletes_product_from_orders() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_product(None)
        .with_mock_product(None)
        .with_mock_order(None, vec![1, 2])
        .with_mock_order(None, vec![1])
        .build()
        .await?;

    let result = delete_product(State(test.into_app_state()), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    assert_eq!(test.shop().count(entity::prelude::Order).await?, 2);
    assert_eq!(test.shop().count(entity::prelude::OrderProduct).await?, 1);

    let result = get_product(State(test.into_app_state()), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
