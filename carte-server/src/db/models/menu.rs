//! Menu Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::RestaurantId;
use super::serde_helpers;

/// Menu ID type
pub type MenuId = RecordId;

/// Menu model — a named, time-scoped grouping of categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<MenuId>,
    /// Owning restaurant record link
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub restaurant: RestaurantId,
    pub name: String,
    /// Availability label shown under the tab (e.g. "11:00 - 15:00")
    #[serde(default)]
    pub available_time: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub available_time: String,
    pub sort_order: Option<i32>,
}

/// Update menu payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}
