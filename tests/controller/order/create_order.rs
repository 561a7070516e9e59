use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use candy_shop::{
    model::{api::BadRequestDto, order::OrderDto},
    server::{controller::order::create_order, util::alert::ALERT_HEADER},
};
use candy_shop_test_utils::constant::{default_date, DEFAULT_NAME};

use super::*;

/// Tests creating an order that lists products.
///
/// Verifies the response carries the fully loaded products and that one link row exists per
/// distinct product.
///
/// Expected: 201 Created with products 1 and 2, links stored for both
#[tokio::test]
async fn creates_order_with_products() -> Result<(), TestError> {
    let test = shop_with_products().await?;

    let order = OrderDto {
        date: Some(default_date()),
        products: vec![product_ref(2), product_ref(1), product_ref(2)],
        ..Default::default()
    };
    let result = create_order(State(test.into_app_state()), Json(order)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers().get(&ALERT_HEADER).unwrap(),
        "candyShopApp.order.created"
    );

    let created: OrderDto = body_json(resp).await?;
    let order_id = created.id.unwrap();
    let product_ids: Vec<_> = created.products.iter().map(|p| p.id).collect();
    assert_eq!(product_ids, vec![Some(1), Some(2)]);
    assert_eq!(created.products[0].name.as_deref(), Some(DEFAULT_NAME));

    assert_eq!(linked_product_ids(&test, order_id).await?, vec![1, 2]);

    Ok(())
}

/// Tests creating an order without products.
///
/// Expected: 201 Created with an empty product list
#[tokio::test]
async fn creates_order_without_products() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = create_order(State(test.into_app_state()), Json(OrderDto::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: OrderDto = body_json(resp).await?;
    assert!(created.id.is_some());
    assert!(created.products.is_empty());
    assert_eq!(test.shop().count(entity::prelude::Order).await?, 1);

    Ok(())
}

/// Tests creating an order that already has an ID.
///
/// Expected: 400 Bad Request with `idexists`, nothing stored
#[tokio::test]
async fn fails_for_order_with_existing_id() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let order = OrderDto {
        id: Some(1),
        ..Default::default()
    };
    let resp = create_order(State(test.into_app_state()), Json(order))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: BadRequestDto = body_json(resp).await?;
    assert_eq!(body.entity_name, "order");
    assert_eq!(body.error_key, "idexists");
    assert_eq!(test.shop().count(entity::prelude::Order).await?, 0);

    Ok(())
}

/// Tests creating an order that lists a product without an ID.
///
/// Expected: 400 Bad Request with `idnull` for the product, nothing stored
#[tokio::test]
async fn fails_for_unsaved_product() -> Result<(), TestError> {
    let test = shop_with_products().await?;

    let order = OrderDto {
        products: vec![product_ref(1), ProductDto::default()],
        ..Default::default()
    };
    let resp = create_order(State(test.into_app_state()), Json(order))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: BadRequestDto = body_json(resp).await?;
    assert_eq!(body.entity_name, "product");
    assert_eq!(body.error_key, "idnull");
    assert_eq!(test.shop().count(entity::prelude::Order).await?, 0);
    assert_eq!(test.shop().count(entity::prelude::OrderProduct).await?, 0);

    Ok(())
}
