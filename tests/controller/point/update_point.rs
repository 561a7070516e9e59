use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use candy_shop::{
    model::{api::BadRequestDto, point::PointDto},
    server::{controller::point::update_point, util::alert::ALERT_HEADER},
};
use candy_shop_test_utils::constant::{updated_date, UPDATED_QUANTITY};
use sea_orm::EntityTrait;

use super::*;

/// Tests updating a stored point.
///
/// Expected: 200 OK with the new quantity, row count unchanged, stored row updated
#[tokio::test]
async fn updates_point() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let stored = test.shop().insert_mock_point(None).await?;
    let count_before = test.shop().count(entity::prelude::Point).await?;

    let point = PointDto {
        id: Some(stored.id),
        quantity: Some(UPDATED_QUANTITY.to_string()),
        date: Some(updated_date()),
        user_id: None,
    };
    let result = update_point(State(test.into_app_state()), Json(point)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(&ALERT_HEADER).unwrap(),
        "candyShopApp.point.updated"
    );

    let updated: PointDto = body_json(resp).await?;
    assert_eq!(updated.id, Some(stored.id));
    assert_eq!(updated.quantity.as_deref(), Some(UPDATED_QUANTITY));

    assert_eq!(test.shop().count(entity::prelude::Point).await?, count_before);
    let row = entity::prelude::Point::find_by_id(stored.id)
        .one(&test.state.db)
        .await?
        .unwrap();
    assert_eq!(row.quantity.as_deref(), Some(UPDATED_QUANTITY));
    assert_eq!(row.date, Some(updated_date()));

    Ok(())
}

/// Tests updating a point without an ID.
///
/// Expected: 400 Bad Request with `idnull`, nothing stored
#[tokio::test]
async fn fails_for_point_without_id() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    test.shop().insert_mock_point(None).await?;
    let count_before = test.shop().count(entity::prelude::Point).await?;

    let point = PointDto {
        quantity: Some(UPDATED_QUANTITY.to_string()),
        ..Default::default()
    };
    let resp = update_point(State(test.into_app_state()), Json(point))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: BadRequestDto = body_json(resp).await?;
    assert_eq!(body.error_key, "idnull");

    assert_eq!(test.shop().count(entity::prelude::Point).await?, count_before);

    Ok(())
}
