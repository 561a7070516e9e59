use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::record::impl_record;

/// A time-tracking entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct PointDto {
    pub id: Option<i64>,
    /// Free text, not validated as a number
    pub quantity: Option<String>,
    pub date: Option<NaiveDate>,
    pub user_id: Option<i64>,
}

impl_record!(PointDto);
