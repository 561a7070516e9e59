//! Category service.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    model::{category::CategoryDto, record::Record},
    server::{data::category::CategoryRepository, error::Error, service::RecordService},
};

/// [`RecordService`] for category records
pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

#[async_trait]
impl<'a> RecordService<'a> for CategoryService<'a> {
    type Record = CategoryDto;

    const ENTITY_NAME: &'static str = "category";

    fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn save(&self, category: CategoryDto) -> Result<CategoryDto, Error> {
        let category_repo = CategoryRepository::new(self.db);

        let saved = match category.identity() {
            Some(id) => category_repo.upsert(id, category).await?,
            None => category_repo.create(category).await?,
        };

        Ok(saved.into())
    }

    async fn get_all(&self) -> Result<Vec<CategoryDto>, Error> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<CategoryDto>, Error> {
        let category = CategoryRepository::new(self.db).get_by_id(id).await?;

        Ok(category.map(CategoryDto::from))
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        CategoryRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}
