//! Test fixture modules for database record creation.
//!
//! - `shop` - Categories, products, orders and their product links, users and points
pub mod shop;
