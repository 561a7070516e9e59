//! Repository for order rows and the eager order reads.
//!
//! Plain reads return order rows only. The `*_with_products` reads also load each order's linked
//! products in a single join query per call.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::order::OrderDto,
    server::{
        data::order_product::OrderProductRepository,
        model::{
            db::{OrderModel, ProductModel},
            page::{OrderPage, PageRequest},
        },
    },
};

/// Repository for the `purchase_order` table
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new instance of [`OrderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the order row, `order.products` is not stored here
    ///
    /// Links to products are written through [`OrderProductRepository`].
    pub async fn create(&self, order: OrderDto) -> Result<OrderModel, DbErr> {
        let order = entity::order::ActiveModel {
            date: ActiveValue::Set(order.date),
            user_id: ActiveValue::Set(order.user_id),
            ..Default::default()
        };

        order.insert(self.db).await
    }

    /// Updates the order row with identity `id`, or inserts it with a fresh identity when no
    /// such order exists
    pub async fn upsert(&self, id: i64, order: OrderDto) -> Result<OrderModel, DbErr> {
        let existing = match entity::prelude::Order::find_by_id(id).one(self.db).await? {
            Some(existing) => existing,
            None => return self.create(order).await,
        };

        let mut order_am = existing.into_active_model();
        order_am.date = ActiveValue::Set(order.date);
        order_am.user_id = ActiveValue::Set(order.user_id);

        order_am.update(self.db).await
    }

    /// Returns the order with identity `id`, `Ok(None)` when there is none
    pub async fn get_by_id(&self, id: i64) -> Result<Option<OrderModel>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Returns every order row ordered by identity, without products
    pub async fn get_all(&self) -> Result<Vec<OrderModel>, DbErr> {
        entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns one page of order rows ordered by identity, without products
    ///
    /// The second element is the number of stored orders.
    pub async fn get_page(&self, page: PageRequest) -> Result<(Vec<OrderModel>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .paginate(self.db, page.size);
        let total = paginator.num_items().await?;

        Ok((paginator.fetch_page(page.page).await?, total))
    }

    /// Returns orders ordered by identity, each with its linked products
    ///
    /// With `page` only that page of orders is loaded; `total` is always the number of stored
    /// orders.
    pub async fn get_all_with_products(
        &self,
        page: Option<PageRequest>,
    ) -> Result<OrderPage, DbErr> {
        let query = entity::prelude::Order::find().order_by_asc(entity::order::Column::Id);

        let (orders, total) = match page {
            Some(page) => {
                let paginator = query.paginate(self.db, page.size);
                let total = paginator.num_items().await?;

                (paginator.fetch_page(page.page).await?, total)
            }
            None => {
                let orders = query.all(self.db).await?;
                let total = orders.len() as u64;

                (orders, total)
            }
        };

        let mut products = self
            .products_by_order(orders.iter().map(|order| order.id).collect())
            .await?;

        let orders = orders
            .into_iter()
            .map(|order| {
                let order_products = products.remove(&order.id).unwrap_or_default();
                (order, order_products)
            })
            .collect();

        Ok(OrderPage { orders, total })
    }

    /// Returns the order with identity `id` along with its linked products
    pub async fn get_one_with_products(
        &self,
        id: i64,
    ) -> Result<Option<(OrderModel, Vec<ProductModel>)>, DbErr> {
        let Some(order) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let products = self
            .products_by_order(vec![order.id])
            .await?
            .remove(&order.id)
            .unwrap_or_default();

        Ok(Some((order, products)))
    }

    /// Deletes an order along with its links to products
    ///
    /// Returns OK regardless of order existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i64) -> Result<DeleteResult, DbErr> {
        OrderProductRepository::new(self.db)
            .remove_all_for_order(id)
            .await?;

        entity::prelude::Order::delete_by_id(id).exec(self.db).await
    }

    async fn products_by_order(
        &self,
        order_ids: Vec<i64>,
    ) -> Result<HashMap<i64, Vec<ProductModel>>, DbErr> {
        let mut products: HashMap<i64, Vec<ProductModel>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(products);
        }

        let links = entity::prelude::OrderProduct::find()
            .filter(entity::order_product::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_product::Column::ProductId)
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?;

        for (link, product) in links {
            if let Some(product) = product {
                products.entry(link.order_id).or_default().push(product);
            }
        }

        Ok(products)
    }
}
