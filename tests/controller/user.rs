//! Tests for user controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use candy_shop::{
    model::user::UserDto,
    server::controller::user::{create_user, delete_user, get_all_users, get_user, update_user},
};
use candy_shop_test_utils::constant::{DEFAULT_NAME, UPDATED_NAME};

use super::*;

/// Tests creating a user then reading it back.
///
/// Expected: 201 Created, and the same user returned by get and list
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let user = UserDto {
        name: Some(DEFAULT_NAME.to_string()),
        email: Some("customer@candy.shop".to_string()),
        ..Default::default()
    };
    let result = create_user(State(test.into_app_state()), Json(user)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: UserDto = body_json(resp).await?;
    let id = created.id.unwrap();

    let result = get_user(State(test.into_app_state()), Path(id)).await;
    assert!(result.is_ok());
    let fetched: UserDto = body_json(result.unwrap().into_response()).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.email.as_deref(), Some("customer@candy.shop"));

    let result = get_all_users(State(test.into_app_state())).await;
    assert!(result.is_ok());
    let users: Vec<UserDto> = body_json(result.unwrap().into_response()).await?;
    assert_eq!(users.len(), 1);

    Ok(())
}

/// Tests updating a user with an ID that was never stored.
///
/// Expected: 200 OK and a new row with a storage-assigned ID
#[tokio::test]
async fn update_of_unknown_user_inserts() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let user = UserDto {
        id: Some(42),
        name: Some(UPDATED_NAME.to_string()),
        ..Default::default()
    };
    let result = update_user(State(test.into_app_state()), Json(user)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let stored: UserDto = body_json(resp).await?;
    assert!(stored.id.is_some());
    assert_eq!(stored.name.as_deref(), Some(UPDATED_NAME));
    assert_eq!(test.shop().count(entity::prelude::User).await?, 1);

    Ok(())
}

/// Tests deleting a user twice.
///
/// Expected: 200 OK both times
#[tokio::test]
async fn delete_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_user()
        .build()
        .await?;

    for _ in 0..2 {
        let result = delete_user(State(test.into_app_state()), Path(1)).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);
    }
    assert_eq!(test.shop().count(entity::prelude::User).await?, 0);

    Ok(())
}
