//! Candy shop backend.
//!
//! Records for categories, products, orders, users and time-tracking points, exposed as
//! plain create/update/list/get/delete REST resources backed by SeaORM.

pub mod model;
pub mod server;
