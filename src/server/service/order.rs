//! Order service.
//!
//! Orders are the owning side of the Order↔Product association: saving an order writes its row
//! and makes its stored product links match the identities listed in [`OrderDto::products`].
//! Eager reads return orders with `products` populated, assembled through an
//! [`OrderProductGraph`] so a product shared by several orders is resolved once.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        order::OrderDto, order_products::OrderProductGraph, product::ProductDto, record::Record,
    },
    server::{
        data::{order::OrderRepository, order_product::OrderProductRepository},
        error::{request::RequestError, Error},
        model::{
            db::{OrderModel, ProductModel},
            page::PageRequest,
        },
        service::RecordService,
    },
};

/// [`RecordService`] for orders, keeping each order's product links in step with its
/// `products`
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Returns orders with their products populated.
    ///
    /// # Arguments
    /// - `page` - Page to load, `None` loads every order
    ///
    /// # Returns
    /// - `Ok((Vec<OrderDto>, u64))` - Orders ordered by identity and the number of stored orders
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_all_with_products(
        &self,
        page: Option<PageRequest>,
    ) -> Result<(Vec<OrderDto>, u64), Error> {
        let page = OrderRepository::new(self.db)
            .get_all_with_products(page)
            .await?;

        Ok((assemble_orders(page.orders), page.total))
    }

    /// Returns order rows only, `products` left empty, along with the number of stored orders.
    pub async fn get_page(&self, page: PageRequest) -> Result<(Vec<OrderDto>, u64), Error> {
        let (orders, total) = OrderRepository::new(self.db).get_page(page).await?;

        Ok((orders.into_iter().map(OrderDto::from).collect(), total))
    }
}

#[async_trait]
impl<'a> RecordService<'a> for OrderService<'a> {
    type Record = OrderDto;

    const ENTITY_NAME: &'static str = "order";

    fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the order row and replaces its product links in one transaction.
    ///
    /// # Returns
    /// - `Ok(OrderDto)` - The stored order with its linked products
    /// - `Err(Error::RequestError)` - A listed product has no identity
    /// - `Err(Error::DbErr)` - A listed product does not exist or the database operation failed
    async fn save(&self, order: OrderDto) -> Result<OrderDto, Error> {
        let product_ids = order
            .products
            .iter()
            .map(|product| {
                product
                    .identity()
                    .ok_or(RequestError::IdNull { entity: "product" })
            })
            .collect::<Result<Vec<i64>, RequestError>>()?;

        let txn = self.db.begin().await?;

        let order_repo = OrderRepository::new(&txn);
        let saved = match order.identity() {
            Some(id) => order_repo.upsert(id, order).await?,
            None => order_repo.create(order).await?,
        };

        OrderProductRepository::new(&txn)
            .replace_for_order(saved.id, &product_ids)
            .await?;

        let stored = order_repo.get_one_with_products(saved.id).await?;

        txn.commit().await?;

        stored
            .and_then(|stored| assemble_orders(vec![stored]).pop())
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to find order ID {} after saving it",
                    saved.id
                ))
            })
    }

    /// Returns every order without products.
    async fn get_all(&self) -> Result<Vec<OrderDto>, Error> {
        let orders = OrderRepository::new(self.db).get_all().await?;

        Ok(orders.into_iter().map(OrderDto::from).collect())
    }

    /// Returns the order with identity `id` with its products populated.
    async fn get(&self, id: i64) -> Result<Option<OrderDto>, Error> {
        let order = OrderRepository::new(self.db)
            .get_one_with_products(id)
            .await?;

        Ok(order.and_then(|order| assemble_orders(vec![order]).pop()))
    }

    /// Deletes the order and its product links in one transaction.
    async fn delete(&self, id: i64) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        OrderRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(())
    }
}

/// Builds eager order records, preserving the order of `rows`.
///
/// Products are inserted by ascending identity before any link is made so every order lists its
/// products in identity order.
fn assemble_orders(rows: Vec<(OrderModel, Vec<ProductModel>)>) -> Vec<OrderDto> {
    let mut graph = OrderProductGraph::new();

    let mut products: Vec<&ProductModel> = rows.iter().flat_map(|(_, p)| p.iter()).collect();
    products.sort_by_key(|product| product.id);
    for product in products {
        graph.insert_product(ProductDto::from(product.clone()));
    }

    for (order, order_products) in rows {
        let order_key = graph.insert_order(OrderDto::from(order));

        for product in order_products {
            if let Some(product_key) = graph.find_product(product.id) {
                graph.add_product(order_key, product_key);
            }
        }
    }

    graph.into_orders()
}
