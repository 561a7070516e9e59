//! Handler bodies shared by every record resource.
//!
//! Each resource module keeps thin annotated handlers for the OpenAPI document and delegates to
//! these functions, parameterized by the resource's [`RecordService`].
//!
//! | Operation | Success | Failure |
//! |---|---|---|
//! | create | 201, record, `Location` and created alert | 400 `idexists` |
//! | update | 200, record and updated alert | 400 `idnull` |
//! | list | 200, every record | |
//! | get | 200, record | 404, empty body |
//! | delete | 200, deleted alert | |

use axum::{
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::{
    model::record::Record,
    server::{
        error::{request::RequestError, Error},
        service::RecordService,
        util::alert::{entity_alert, Alert},
    },
};

/// Stores a record that must not carry an identity yet.
///
/// `base_path` is the resource collection path, the `Location` header points at
/// `{base_path}/{id}`.
pub async fn create<'a, S, R>(
    db: &'a DatabaseConnection,
    base_path: &str,
    record: R,
) -> Result<Response, Error>
where
    S: RecordService<'a, Record = R>,
    R: Record + Serialize + Send,
{
    if record.identity().is_some() {
        return Err(RequestError::IdExists {
            entity: S::ENTITY_NAME,
        }
        .into());
    }

    let saved = S::new(db).save(record).await?;
    let id = stored_identity(S::ENTITY_NAME, &saved)?;

    let mut headers = entity_alert(S::ENTITY_NAME, Alert::Created, id);
    let location = HeaderValue::try_from(format!("{}/{}", base_path, id))
        .map_err(|e| Error::InternalError(format!("Invalid location header: {}", e)))?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(saved)).into_response())
}

/// Stores a record that must already carry an identity.
///
/// An identity without a stored row inserts a new row with a fresh identity.
pub async fn update<'a, S, R>(db: &'a DatabaseConnection, record: R) -> Result<Response, Error>
where
    S: RecordService<'a, Record = R>,
    R: Record + Serialize + Send,
{
    if record.identity().is_none() {
        return Err(RequestError::IdNull {
            entity: S::ENTITY_NAME,
        }
        .into());
    }

    let saved = S::new(db).save(record).await?;
    let id = stored_identity(S::ENTITY_NAME, &saved)?;

    Ok((
        StatusCode::OK,
        entity_alert(S::ENTITY_NAME, Alert::Updated, id),
        Json(saved),
    )
        .into_response())
}

/// Lists every stored record.
pub async fn list<'a, S, R>(db: &'a DatabaseConnection) -> Result<Response, Error>
where
    S: RecordService<'a, Record = R>,
    R: Record + Serialize + Send,
{
    let records = S::new(db).get_all().await?;

    Ok((StatusCode::OK, Json(records)).into_response())
}

/// Reads one record, answering 404 with an empty body when there is none.
pub async fn get<'a, S, R>(db: &'a DatabaseConnection, id: i64) -> Result<Response, Error>
where
    S: RecordService<'a, Record = R>,
    R: Record + Serialize + Send,
{
    match S::new(db).get(id).await? {
        Some(record) => Ok((StatusCode::OK, Json(record)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Deletes by identity, succeeding whether or not the record existed.
pub async fn delete<'a, S>(db: &'a DatabaseConnection, id: i64) -> Result<Response, Error>
where
    S: RecordService<'a>,
{
    S::new(db).delete(id).await?;

    Ok((
        StatusCode::OK,
        entity_alert(S::ENTITY_NAME, Alert::Deleted, id),
    )
        .into_response())
}

fn stored_identity<R: Record>(entity: &str, record: &R) -> Result<i64, Error> {
    record.identity().ok_or_else(|| {
        Error::InternalError(format!(
            "Stored {} was returned without an identity",
            entity
        ))
    })
}
