//! Restaurant Model
//!
//! 餐厅是聚合根：拥有者 (user)、主图、横幅图集合以及菜单子表。

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::menu::Menu;
use super::serde_helpers;
use super::{Category, Image, MenuItem, UserId};

/// Restaurant ID type
pub type RestaurantId = RecordId;

/// Restaurant model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RestaurantId>,
    pub name: String,
    pub location: String,
    /// Owning user record link (stored natively so WHERE clauses and
    /// graph paths like category.menu.restaurant keep working)
    #[serde(deserialize_with = "serde_helpers::record_id::deserialize")]
    pub user: UserId,
    /// Primary image, shown first in the banner carousel when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Promotional banner images, in display order
    #[serde(default)]
    pub banners: Vec<Image>,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_published: bool,
    /// 创建时间 (Unix millis)
    #[serde(default)]
    pub created_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    pub image: Option<Image>,
    #[serde(default)]
    pub banners: Vec<Image>,
}

/// Update restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banners: Option<Vec<Image>>,
}

// =============================================================================
// Nested detail aggregates (read side)
// =============================================================================

/// Category with its items, in sort order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDetails {
    #[serde(flatten)]
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// Menu with its categories, in sort order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDetails {
    #[serde(flatten)]
    pub menu: Menu,
    pub categories: Vec<CategoryDetails>,
}

/// Restaurant with the full menu tree hydrated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDetails {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub menus: Vec<MenuDetails>,
}

impl RestaurantDetails {
    /// Owning user id as a "user:id" string
    pub fn owner_id(&self) -> String {
        self.restaurant.user.to_string()
    }
}
