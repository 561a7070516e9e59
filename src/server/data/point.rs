//! Repository for point rows.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::point::PointDto, server::model::db::PointModel};

/// Repository for the `point` table
pub struct PointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PointRepository<'a, C> {
    /// Creates a new instance of [`PointRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new point, the identity is assigned by the database
    pub async fn create(&self, point: PointDto) -> Result<PointModel, DbErr> {
        let point = entity::point::ActiveModel {
            quantity: ActiveValue::Set(point.quantity),
            date: ActiveValue::Set(point.date),
            user_id: ActiveValue::Set(point.user_id),
            ..Default::default()
        };

        point.insert(self.db).await
    }

    /// Updates the point with identity `id`, or inserts it with a fresh identity when no such
    /// point exists
    pub async fn upsert(&self, id: i64, point: PointDto) -> Result<PointModel, DbErr> {
        let existing = match entity::prelude::Point::find_by_id(id).one(self.db).await? {
            Some(existing) => existing,
            None => return self.create(point).await,
        };

        let mut point_am = existing.into_active_model();
        point_am.quantity = ActiveValue::Set(point.quantity);
        point_am.date = ActiveValue::Set(point.date);
        point_am.user_id = ActiveValue::Set(point.user_id);

        point_am.update(self.db).await
    }

    /// Returns the point with identity `id`, `Ok(None)` when there is none
    pub async fn get_by_id(&self, id: i64) -> Result<Option<PointModel>, DbErr> {
        entity::prelude::Point::find_by_id(id).one(self.db).await
    }

    /// Returns every point ordered by identity
    pub async fn get_all(&self) -> Result<Vec<PointModel>, DbErr> {
        entity::prelude::Point::find()
            .order_by_asc(entity::point::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a point
    ///
    /// Returns OK regardless of point existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Point::delete_by_id(id).exec(self.db).await
    }
}
