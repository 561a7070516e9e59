//! Shop record fixture utilities.
//!
//! Inserts rows with the standard values from [`crate::constant`] and returns the stored
//! models so tests can refer to the assigned identities.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{default_date, DEFAULT_NAME, DEFAULT_PRICE, DEFAULT_QUANTITY, DEFAULT_STOCK},
    error::TestError,
    model::{CategoryModel, OrderModel, PointModel, ProductModel, UserModel},
    TestSetup,
};

impl TestSetup {
    pub fn shop<'a>(&'a self) -> ShopFixtures<'a> {
        ShopFixtures { setup: self }
    }
}

pub struct ShopFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> ShopFixtures<'a> {
    pub async fn insert_mock_category(&self) -> Result<CategoryModel, TestError> {
        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(Some(DEFAULT_NAME.to_string())),
                description: ActiveValue::Set(Some(DEFAULT_NAME.to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_mock_product(
        &self,
        category_id: Option<i64>,
    ) -> Result<ProductModel, TestError> {
        Ok(
            entity::prelude::Product::insert(entity::product::ActiveModel {
                name: ActiveValue::Set(Some(DEFAULT_NAME.to_string())),
                price: ActiveValue::Set(Some(DEFAULT_PRICE.to_string())),
                stock: ActiveValue::Set(Some(DEFAULT_STOCK)),
                category_id: ActiveValue::Set(category_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_mock_user(&self) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(Some(DEFAULT_NAME.to_string())),
                email: ActiveValue::Set(Some("customer@candy.shop".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts an order and links it to every product in `product_ids`.
    pub async fn insert_mock_order(
        &self,
        user_id: Option<i64>,
        product_ids: &[i64],
    ) -> Result<OrderModel, TestError> {
        let order = entity::prelude::Order::insert(entity::order::ActiveModel {
            date: ActiveValue::Set(Some(default_date())),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?;

        for product_id in product_ids {
            self.insert_order_product(order.id, *product_id).await?;
        }

        Ok(order)
    }

    pub async fn insert_order_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<entity::order_product::Model, TestError> {
        Ok(
            entity::prelude::OrderProduct::insert(entity::order_product::ActiveModel {
                order_id: ActiveValue::Set(order_id),
                product_id: ActiveValue::Set(product_id),
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_mock_point(&self, user_id: Option<i64>) -> Result<PointModel, TestError> {
        Ok(
            entity::prelude::Point::insert(entity::point::ActiveModel {
                quantity: ActiveValue::Set(Some(DEFAULT_QUANTITY.to_string())),
                date: ActiveValue::Set(Some(default_date())),
                user_id: ActiveValue::Set(user_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Number of rows currently stored for `entity`.
    pub async fn count<E: EntityTrait>(&self, _entity: E) -> Result<usize, TestError> {
        Ok(E::find().all(&self.setup.state.db).await?.len())
    }
}
