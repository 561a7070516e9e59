//! Repository for product rows.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::product::ProductDto,
    server::{data::order_product::OrderProductRepository, model::db::ProductModel},
};

/// Repository for the `product` table, keeps order links consistent on delete
pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new product, the identity is assigned by the database
    pub async fn create(&self, product: ProductDto) -> Result<ProductModel, DbErr> {
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(product.name),
            price: ActiveValue::Set(product.price),
            stock: ActiveValue::Set(product.stock),
            category_id: ActiveValue::Set(product.category_id),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    /// Updates the product with identity `id`, or inserts it with a fresh identity when no such
    /// product exists
    pub async fn upsert(&self, id: i64, product: ProductDto) -> Result<ProductModel, DbErr> {
        let existing = match entity::prelude::Product::find_by_id(id).one(self.db).await? {
            Some(existing) => existing,
            None => return self.create(product).await,
        };

        let mut product_am = existing.into_active_model();
        product_am.name = ActiveValue::Set(product.name);
        product_am.price = ActiveValue::Set(product.price);
        product_am.stock = ActiveValue::Set(product.stock);
        product_am.category_id = ActiveValue::Set(product.category_id);

        product_am.update(self.db).await
    }

    /// Returns the product with identity `id`, `Ok(None)` when there is none
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ProductModel>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Returns every product ordered by identity
    pub async fn get_all(&self) -> Result<Vec<ProductModel>, DbErr> {
        entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a product along with its links to orders
    ///
    /// Returns OK regardless of product existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        OrderProductRepository::new(self.db)
            .remove_all_for_product(id)
            .await?;

        entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
