//! Repository for category rows.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::category::CategoryDto, server::model::db::CategoryModel};

/// Repository for the `category` table
pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new category, the identity is assigned by the database
    pub async fn create(&self, category: CategoryDto) -> Result<CategoryModel, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(category.name),
            description: ActiveValue::Set(category.description),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    /// Updates the category with identity `id`, or inserts it with a fresh identity when no
    /// such category exists
    pub async fn upsert(&self, id: i64, category: CategoryDto) -> Result<CategoryModel, DbErr> {
        let existing = match entity::prelude::Category::find_by_id(id).one(self.db).await? {
            Some(existing) => existing,
            None => return self.create(category).await,
        };

        let mut category_am = existing.into_active_model();
        category_am.name = ActiveValue::Set(category.name);
        category_am.description = ActiveValue::Set(category.description);

        category_am.update(self.db).await
    }

    /// Returns the category with identity `id`, `Ok(None)` when there is none
    pub async fn get_by_id(&self, id: i64) -> Result<Option<CategoryModel>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Returns every category ordered by identity
    pub async fn get_all(&self) -> Result<Vec<CategoryModel>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a category
    ///
    /// Returns OK regardless of category existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
