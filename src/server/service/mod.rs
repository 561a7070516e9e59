//! Service layer between the HTTP facade and the repositories.
//!
//! Every stored record type has a service implementing [`RecordService`], which turns wire
//! records into repository calls and repository models back into wire records. Multi-step writes
//! (an order with its product links, deletes that also remove links) run inside one transaction.

pub mod category;
pub mod order;
pub mod point;
pub mod product;
pub mod user;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{model::record::Record, server::error::Error};

/// CRUD operations shared by every record service.
///
/// `save` inserts a record without identity and upserts a record with one: an identity that
/// matches a stored row updates it, an unknown identity inserts a new row with a fresh identity.
#[async_trait]
pub trait RecordService<'a>: Send + Sync + Sized {
    /// Wire record handled by the service
    type Record: Record + Send + 'static;

    /// Entity name used in alert headers and client error bodies, e.g. `point`
    const ENTITY_NAME: &'static str;

    /// Creates the service over a pooled connection
    fn new(db: &'a DatabaseConnection) -> Self;

    /// Stores the record and returns it with its assigned identity
    async fn save(&self, record: Self::Record) -> Result<Self::Record, Error>;

    /// Returns every stored record ordered by identity
    async fn get_all(&self) -> Result<Vec<Self::Record>, Error>;

    /// Returns the record with identity `id`, `Ok(None)` when there is none
    async fn get(&self, id: i64) -> Result<Option<Self::Record>, Error>;

    /// Deletes the record with identity `id`, succeeding when there is none
    async fn delete(&self, id: i64) -> Result<(), Error>;
}
