use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use candy_shop::{
    model::{api::BadRequestDto, order::OrderDto},
    server::controller::order::update_order,
};
use candy_shop_test_utils::constant::updated_date;

use super::*;

/// Tests replacing the products of an order.
///
/// Verifies links absent from the request are removed, new ones added and kept ones untouched.
///
/// Expected: 200 OK, order linked to exactly products 2 and 3
#[tokio::test]
async fn replaces_linked_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_category()
        .with_mock_product(Some(1))
        .with_mock_product(Some(1))
        .with_mock_product(Some(1))
        .with_mock_order(None, vec![1, 2])
        .build()
        .await?;

    let order = OrderDto {
        id: Some(1),
        date: Some(updated_date()),
        user_id: None,
        products: vec![product_ref(3), product_ref(2)],
    };
    let result = update_order(State(test.into_app_state()), Json(order)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: OrderDto = body_json(resp).await?;
    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.date, Some(updated_date()));
    let product_ids: Vec<_> = updated.products.iter().map(|p| p.id).collect();
    assert_eq!(product_ids, vec![Some(2), Some(3)]);

    assert_eq!(linked_product_ids(&test, 1).await?, vec![2, 3]);
    assert_eq!(test.shop().count(entity::prelude::Order).await?, 1);

    Ok(())
}

/// Tests that updating one order leaves the links of another order sharing a product intact.
///
/// Expected: 200 OK, second order still linked to product 1
#[tokio::test]
async fn leaves_other_orders_untouched() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_category()
        .with_mock_product(Some(1))
        .with_mock_order(None, vec![1])
        .with_mock_order(None, vec![1])
        .build()
        .await?;

    let order = OrderDto {
        id: Some(1),
        ..Default::default()
    };
    let result = update_order(State(test.into_app_state()), Json(order)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    assert!(linked_product_ids(&test, 1).await?.is_empty());
    assert_eq!(linked_product_ids(&test, 2).await?, vec![1]);

    Ok(())
}

/// Tests updating an order without an ID.
///
/// Expected: 400 Bad Request with `idnull`
#[tokio::test]
async fn fails_for_order_without_id() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let resp = update_order(State(test.into_app_state()), Json(OrderDto::default()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: BadRequestDto = body_json(resp).await?;
    assert_eq!(body.error_key, "idnull");
    assert_eq!(test.shop().count(entity::prelude::Order).await?, 0);

    Ok(())
}
