use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use candy_shop::server::controller::order::delete_order;

use super::*;

/// Tests deleting an order linked to products.
///
/// Verifies the order's links are removed while the products and other orders' links remain.
///
/// Expected: 200 OK, order and its links gone
#[tokio::test]
async fn deletes_order_and_links() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_category()
        .with_mock_product(Some(1))
        .with_mock_product(Some(1))
        .with_mock_order(None, vec![1, 2])
        .with_mock_order(None, vec![2])
        .build()
        .await?;

    let result = delete_order(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    assert_eq!(test.shop().count(entity::prelude::Order).await?, 1);
    assert_eq!(test.shop().count(entity::prelude::Product).await?, 2);
    assert!(linked_product_ids(&test, 1).await?.is_empty());
    assert_eq!(linked_product_ids(&test, 2).await?, vec![2]);

    Ok(())
}
