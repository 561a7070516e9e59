use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{product::ProductDto, record::impl_record};

/// A customer order.
///
/// `products` is only populated on the eager read paths. When an order is saved, the
/// identities found in `products` become the order's complete product set.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct OrderDto {
    pub id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub user_id: Option<i64>,
    pub products: Vec<ProductDto>,
}

impl_record!(OrderDto);
