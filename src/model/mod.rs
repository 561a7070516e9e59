//! Records shared between the HTTP facade and the service layer.
//!
//! Every record type follows the identity contract in [`record`]: equality and hashing only
//! look at the storage-assigned identity, never at field values.

pub mod api;
pub mod category;
pub mod order;
pub mod order_products;
pub mod point;
pub mod product;
pub mod record;
pub mod user;
