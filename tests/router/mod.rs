//! End-to-end requests through the full router.
//!
//! Unlike the controller tests these go through path matching, query and JSON extraction, so
//! they cover the wiring in `router::routes` rather than handler logic.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use candy_shop::{
    model::{order::OrderDto, point::PointDto},
    server::{controller::order::TOTAL_COUNT_HEADER, router},
};
use candy_shop_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, TestSetupExt};

fn app(test: &TestSetup) -> Router {
    router::routes().with_state(test.into_app_state())
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Tests the create, update and delete flow of a point over HTTP.
///
/// Expected: 201, 200, 200, then 404 for the deleted point
#[tokio::test]
async fn point_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            "/api/points",
            serde_json::json!({ "quantity": "AAAAAAAAAA", "date": "1970-01-01" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: PointDto = body_json(resp).await?;
    let id = created.id.unwrap();

    let resp = app(&test)
        .oneshot(json_request(
            Method::PUT,
            "/api/points",
            serde_json::json!({ "id": id, "quantity": "BBBBBBBBBB" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/points/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(&test)
        .oneshot(get_request(&format!("/api/points/{}", id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests the order listing query string.
///
/// Expected: eager, paged listing with the total count header
#[tokio::test]
async fn order_listing_query() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_mock_product(None)
        .with_mock_order(None, vec![1])
        .with_mock_order(None, vec![])
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(get_request("/api/orders?eagerload=true&page=0&size=1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(&TOTAL_COUNT_HEADER).unwrap(), "2");

    let orders: Vec<OrderDto> = body_json(resp).await?;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].products.len(), 1);

    let resp = app(&test)
        .oneshot(get_request("/api/orders?size=0"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests that every resource path is routed.
///
/// Expected: 200 OK for each listing
#[tokio::test]
async fn lists_every_resource() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    for uri in [
        "/api/categories",
        "/api/products",
        "/api/orders",
        "/api/users",
        "/api/points",
    ] {
        let resp = app(&test).oneshot(get_request(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
    }

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 OK with a JSON document naming every resource tag
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(&test)
        .oneshot(get_request("/api/docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: serde_json::Value = body_json(resp).await?;
    let tags: Vec<_> = doc["tags"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|tag| tag["name"].as_str())
        .collect();
    for tag in ["category", "product", "order", "user", "point"] {
        assert!(tags.contains(&tag), "{}", tag);
    }

    Ok(())
}
