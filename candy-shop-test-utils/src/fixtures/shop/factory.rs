//! Factory functions for generating mock shop database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of conversions and in-memory association handling.

use crate::{
    constant::{default_date, DEFAULT_NAME, DEFAULT_PRICE, DEFAULT_QUANTITY, DEFAULT_STOCK},
    model::{CategoryModel, OrderModel, PointModel, ProductModel, UserModel},
};

pub fn mock_category_model(id: i64) -> CategoryModel {
    CategoryModel {
        id,
        name: Some(DEFAULT_NAME.to_string()),
        description: None,
    }
}

/// Create a mock product model belonging to `category_id`.
pub fn mock_product_model(id: i64, category_id: Option<i64>) -> ProductModel {
    ProductModel {
        id,
        name: Some(DEFAULT_NAME.to_string()),
        price: Some(DEFAULT_PRICE.to_string()),
        stock: Some(DEFAULT_STOCK),
        category_id,
    }
}

pub fn mock_order_model(id: i64, user_id: Option<i64>) -> OrderModel {
    OrderModel {
        id,
        date: Some(default_date()),
        user_id,
    }
}

pub fn mock_user_model(id: i64) -> UserModel {
    UserModel {
        id,
        name: Some(DEFAULT_NAME.to_string()),
        email: Some("customer@candy.shop".to_string()),
    }
}

pub fn mock_point_model(id: i64, user_id: Option<i64>) -> PointModel {
    PointModel {
        id,
        quantity: Some(DEFAULT_QUANTITY.to_string()),
        date: Some(default_date()),
        user_id,
    }
}
