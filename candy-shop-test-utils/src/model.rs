//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main candy shop crate to keep test signatures consistent.

pub type CategoryModel = entity::category::Model;
pub type ProductModel = entity::product::Model;
pub type OrderModel = entity::order::Model;
pub type OrderProductModel = entity::order_product::Model;
pub type UserModel = entity::user::Model;
pub type PointModel = entity::point::Model;
