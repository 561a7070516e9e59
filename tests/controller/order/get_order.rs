use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use candy_shop::{model::order::OrderDto, server::controller::order::get_order};

use super::*;

/// Tests getting an order with its products.
///
/// Expected: 200 OK with the linked products populated
#[tokio::test]
async fn gets_order_with_products() -> Result<(), TestError> {
    let test = shop_with_products().await?;
    let stored = test.shop().insert_mock_order(None, &[3, 1]).await?;

    let result = get_order(State(test.into_app_state()), Path(stored.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let order: OrderDto = body_json(resp).await?;
    assert_eq!(order.id, Some(stored.id));
    let product_ids: Vec<_> = order.products.iter().map(|p| p.id).collect();
    assert_eq!(product_ids, vec![Some(1), Some(3)]);

    Ok(())
}

/// Tests getting an order that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn not_found_for_nonexistent_order() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = get_order(State(test.into_app_state()), Path(i64::MAX)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
