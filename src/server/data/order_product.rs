//! Persisted Order↔Product links.
//!
//! Each link is one `(order_id, product_id)` row; the pair is the primary key so a product is
//! linked to an order at most once. Adding an existing pair and removing a missing pair both
//! succeed without changes.

use std::collections::BTreeSet;

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::OrderProductModel;

/// Repository for the `order_product` join table
pub struct OrderProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderProductRepository<'a, C> {
    /// Creates a new instance of [`OrderProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links `product_id` to `order_id`
    ///
    /// # Returns
    /// - `Ok(true)` - The link was created
    /// - `Ok(false)` - The pair was already linked, nothing was written
    /// - `Err(DbErr)` - Either side does not exist or the query failed
    pub async fn add(&self, order_id: i64, product_id: i64) -> Result<bool, DbErr> {
        let existing = entity::prelude::OrderProduct::find_by_id((order_id, product_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::OrderProduct::insert(link(order_id, product_id))
            .exec_with_returning(self.db)
            .await?;

        Ok(true)
    }

    /// Unlinks `product_id` from `order_id`
    ///
    /// Returns OK regardless of the link existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn remove(&self, order_id: i64, product_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::OrderProduct::delete_many()
            .filter(entity::order_product::Column::OrderId.eq(order_id))
            .filter(entity::order_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await
    }

    /// Makes the links of `order_id` exactly `product_ids`, duplicates are ignored
    pub async fn replace_for_order(
        &self,
        order_id: i64,
        product_ids: &[i64],
    ) -> Result<Vec<OrderProductModel>, DbErr> {
        self.remove_all_for_order(order_id).await?;

        let product_ids: BTreeSet<i64> = product_ids.iter().copied().collect();
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let links = product_ids
            .into_iter()
            .map(|product_id| link(order_id, product_id));

        entity::prelude::OrderProduct::insert_many(links)
            .exec_with_returning(self.db)
            .await
    }

    /// Identities of the products linked to `order_id`, ascending
    pub async fn get_product_ids(&self, order_id: i64) -> Result<Vec<i64>, DbErr> {
        let links = entity::prelude::OrderProduct::find()
            .filter(entity::order_product::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_product::Column::ProductId)
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.product_id).collect())
    }

    /// Removes every link of the order
    pub async fn remove_all_for_order(&self, order_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::OrderProduct::delete_many()
            .filter(entity::order_product::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await
    }

    /// Removes the product from every order
    pub async fn remove_all_for_product(&self, product_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::OrderProduct::delete_many()
            .filter(entity::order_product::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await
    }
}

fn link(order_id: i64, product_id: i64) -> entity::order_product::ActiveModel {
    entity::order_product::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        product_id: ActiveValue::Set(product_id),
    }
}
