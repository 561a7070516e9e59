//! Paging of list reads.

use crate::server::model::db::{OrderModel, ProductModel};

/// Default number of records per page when a page is requested without a size.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// A zero-based page of a list read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u64,
    /// Records per page, always greater than zero
    pub size: u64,
}

/// Orders with their linked products and the total number of stored orders.
#[derive(Debug, Default)]
pub struct OrderPage {
    /// Orders of the page ordered by identity, products ordered by identity
    pub orders: Vec<(OrderModel, Vec<ProductModel>)>,
    /// Number of stored orders across every page
    pub total: u64,
}
