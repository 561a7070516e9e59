use serde::{Deserialize, Serialize};

use crate::model::record::impl_record;

/// A shop user, referenced by orders and points.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct UserDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl_record!(UserDto);
