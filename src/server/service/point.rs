//! Point service.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{point::PointDto, record::Record},
    server::{data::point::PointRepository, error::Error, service::RecordService},
};

/// [`RecordService`] for point records
pub struct PointService<'a> {
    db: &'a DatabaseConnection,
}

#[async_trait]
impl<'a> RecordService<'a> for PointService<'a> {
    type Record = PointDto;

    const ENTITY_NAME: &'static str = "point";

    fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn save(&self, point: PointDto) -> Result<PointDto, Error> {
        let point_repo = PointRepository::new(self.db);

        let saved = match point.identity() {
            Some(id) => point_repo.upsert(id, point).await?,
            None => point_repo.create(point).await?,
        };

        Ok(saved.into())
    }

    async fn get_all(&self) -> Result<Vec<PointDto>, Error> {
        let points = PointRepository::new(self.db).get_all().await?;

        Ok(points.into_iter().map(PointDto::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<PointDto>, Error> {
        let point = PointRepository::new(self.db).get_by_id(id).await?;

        Ok(point.map(PointDto::from))
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        PointRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
