//! Test utilities shared by the integration tests

use axum::response::Response;
use candy_shop::server::model::app::AppState;
use candy_shop_test_utils::{TestError, TestSetup};
use serde::de::DeserializeOwned;

/// Extension trait for TestSetup to create the server's AppState
pub trait TestSetupExt {
    fn into_app_state(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn into_app_state(&self) -> AppState {
        self.state()
    }
}

/// Reads the response body and deserializes it as JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> Result<T, TestError> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Reads the response body as raw bytes
pub async fn body_bytes(resp: Response) -> Result<Vec<u8>, TestError> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;

    Ok(bytes.to_vec())
}
