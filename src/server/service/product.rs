//! Product service.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{product::ProductDto, record::Record},
    server::{data::product::ProductRepository, error::Error, service::RecordService},
};

/// [`RecordService`] for product records
pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

#[async_trait]
impl<'a> RecordService<'a> for ProductService<'a> {
    type Record = ProductDto;

    const ENTITY_NAME: &'static str = "product";

    fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn save(&self, product: ProductDto) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        let saved = match product.identity() {
            Some(id) => product_repo.upsert(id, product).await?,
            None => product_repo.create(product).await?,
        };

        Ok(saved.into())
    }

    async fn get_all(&self) -> Result<Vec<ProductDto>, Error> {
        let products = ProductRepository::new(self.db).get_all().await?;

        Ok(products.into_iter().map(ProductDto::from).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<ProductDto>, Error> {
        let product = ProductRepository::new(self.db).get_by_id(id).await?;

        Ok(product.map(ProductDto::from))
    }

    /// Deletes the product and its links to orders in one transaction.
    async fn delete(&self, id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        ProductRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(())
    }
}
