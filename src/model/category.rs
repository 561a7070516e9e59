use serde::{Deserialize, Serialize};

use crate::model::record::impl_record;

/// A product category.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CategoryDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl_record!(CategoryDto);
