//! Database model type aliases.
//!
//! Type aliases for the SeaORM entity models used throughout the server, along with their
//! conversions into the wire records of [`crate::model`]. Conversions always carry the stored
//! identity, so a converted record compares equal to any other record of the same row.

use crate::model::{
    category::CategoryDto, order::OrderDto, point::PointDto, product::ProductDto, user::UserDto,
};

/// Type alias for product category database model.
pub type CategoryModel = entity::category::Model;

/// Type alias for product database model.
///
/// # Fields (from `entity::product::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `price` - Decimal price kept as text
/// - `stock` - Units available
/// - `category_id` - Foreign key to the product's category (nullable)
pub type ProductModel = entity::product::Model;

/// Type alias for customer order database model.
///
/// The products of an order are not part of the row; they are stored as
/// [`OrderProductModel`] links.
pub type OrderModel = entity::order::Model;

/// Type alias for the Order↔Product join row, keyed by `(order_id, product_id)`.
pub type OrderProductModel = entity::order_product::Model;

/// Type alias for shop user database model.
pub type UserModel = entity::user::Model;

/// Type alias for time-tracking point database model.
pub type PointModel = entity::point::Model;

impl From<CategoryModel> for CategoryDto {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
        }
    }
}

impl From<ProductModel> for ProductDto {
    fn from(model: ProductModel) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            price: model.price,
            stock: model.stock,
            category_id: model.category_id,
        }
    }
}

/// Converts the order row alone; `products` is left empty.
impl From<OrderModel> for OrderDto {
    fn from(model: OrderModel) -> Self {
        Self {
            id: Some(model.id),
            date: model.date,
            user_id: model.user_id,
            products: Vec::new(),
        }
    }
}

impl From<UserModel> for UserDto {
    fn from(model: UserModel) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            email: model.email,
        }
    }
}

impl From<PointModel> for PointDto {
    fn from(model: PointModel) -> Self {
        Self {
            id: Some(model.id),
            quantity: model.quantity,
            date: model.date,
            user_id: model.user_id,
        }
    }
}
