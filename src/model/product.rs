use serde::{Deserialize, Serialize};

use crate::model::record::impl_record;

/// A product for sale.
///
/// The orders a product belongs to are not carried here; the association is owned by the
/// order side, see [`crate::model::order_products::OrderProductGraph`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct ProductDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Decimal price kept as text
    pub price: Option<String>,
    pub stock: Option<i32>,
    pub category_id: Option<i64>,
}

impl_record!(ProductDto);
