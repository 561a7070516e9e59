use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use candy_shop::server::{controller::point::delete_point, util::alert::ALERT_HEADER};

use super::*;

/// Tests deleting a stored point.
///
/// Expected: 200 OK with deleted alert, one row fewer
#[tokio::test]
async fn deletes_point() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let stored = test.shop().insert_mock_point(None).await?;
    let count_before = test.shop().count(entity::prelude::Point).await?;

    let result = delete_point(State(test.into_app_state()), Path(stored.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(&ALERT_HEADER).unwrap(),
        "candyShopApp.point.deleted"
    );

    assert_eq!(
        test.shop().count(entity::prelude::Point).await?,
        count_before - 1
    );

    Ok(())
}

/// Tests deleting a point that does not exist.
///
/// Expected: 200 OK, deletes are idempotent
#[tokio::test]
async fn succeeds_for_nonexistent_point() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = delete_point(State(test.into_app_state()), Path(i64::MAX)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}
