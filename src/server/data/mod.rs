//! Data access layer repositories.
//!
//! One repository per stored record type plus [`order_product`] for the Order↔Product join
//! rows. Every repository borrows a [`sea_orm::ConnectionTrait`] so the same code runs against a
//! pooled connection or inside a transaction.

pub mod category;
pub mod order;
pub mod order_product;
pub mod point;
pub mod product;
pub mod user;
