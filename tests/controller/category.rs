//! Tests for category controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use candy_shop::{
    model::{api::BadRequestDto, category::CategoryDto},
    server::controller::category::{
        create_category, delete_category, get_all_categories, get_category, update_category,
    },
};
use candy_shop_test_utils::constant::{DEFAULT_NAME, UPDATED_NAME};

use super::*;

/// Tests creating a category.
///
/// Expected: 201 Created with `Location` pointing at the new category
#[tokio::test]
async fn creates_category() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let category = CategoryDto {
        name: Some(DEFAULT_NAME.to_string()),
        ..Default::default()
    };
    let result = create_category(State(test.into_app_state()), Json(category)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp.headers().get("location").unwrap().to_str().unwrap().to_string();
    let created: CategoryDto = body_json(resp).await?;
    assert_eq!(location, format!("/api/categories/{}", created.id.unwrap()));
    assert_eq!(test.shop().count(entity::prelude::Category).await?, 1);

    Ok(())
}

/// Tests creating a category that already has an ID.
///
/// Expected: 400 Bad Request with `idexists`
#[tokio::test]
async fn fails_for_category_with_existing_id() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let category = CategoryDto {
        id: Some(1),
        ..Default::default()
    };
    let resp = create_category(State(test.into_app_state()), Json(category))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: BadRequestDto = body_json(resp).await?;
    assert_eq!(body.entity_name, "category");
    assert_eq!(body.error_key, "idexists");
    assert_eq!(test.shop().count(entity::prelude::Category).await?, 0);

    Ok(())
}

/// Tests updating, listing and getting a category.
///
/// Expected: the updated name is returned by every read
#[tokio::test]
async fn updates_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_category()
        .build()
        .await?;

    let category = CategoryDto {
        id: Some(1),
        name: Some(UPDATED_NAME.to_string()),
        description: Some("Chewy".to_string()),
    };
    let result = update_category(State(test.into_app_state()), Json(category)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_all_categories(State(test.into_app_state())).await;
    assert!(result.is_ok());
    let categories: Vec<CategoryDto> = body_json(result.unwrap().into_response()).await?;
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name.as_deref(), Some(UPDATED_NAME));

    let result = get_category(State(test.into_app_state()), Path(1)).await;
    assert!(result.is_ok());
    let category: CategoryDto = body_json(result.unwrap().into_response()).await?;
    assert_eq!(category.description.as_deref(), Some("Chewy"));
    assert_ne!(category.name.as_deref(), Some(DEFAULT_NAME));

    Ok(())
}

/// Tests deleting a category.
///
/// Expected: 200 OK and a later get returns 404
#[tokio::test]
async fn deletes_category() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_category()
        .build()
        .await?;

    let result = delete_category(State(test.into_app_state()), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_category(State(test.into_app_state()), Path(1)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
