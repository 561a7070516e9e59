//! Standard field values used by fixtures and factories.
//!
//! Values follow the default/updated pairs used by the controller tests: a record is created with
//! the `DEFAULT_*` value and an update is verified by switching to the `UPDATED_*` value.

use chrono::NaiveDate;

/// Quantity stored on freshly created points.
pub static DEFAULT_QUANTITY: &str = "AAAAAAAAAA";
/// Quantity written by update tests.
pub static UPDATED_QUANTITY: &str = "BBBBBBBBBB";

/// Name stored on freshly created categories, products and users.
pub static DEFAULT_NAME: &str = "AAAAAAAAAA";
/// Name written by update tests.
pub static UPDATED_NAME: &str = "BBBBBBBBBB";

/// Price stored on freshly created products.
pub static DEFAULT_PRICE: &str = "1.00";
/// Stock stored on freshly created products.
pub static DEFAULT_STOCK: i32 = 10;

/// Date stored on freshly created orders and points.
pub fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Date written by update tests.
pub fn updated_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}
