use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    BodyError(#[from] axum::Error),
}
