//! SeaORM entity definitions for the candy shop schema.

pub mod prelude;

pub mod category;
pub mod order;
pub mod order_product;
pub mod point;
pub mod product;
pub mod user;
