//! Database Models
//!
//! 菜单领域模型：User → Restaurant → Menu → Category → MenuItem，
//! Image 作为内嵌值对象 (仅用于展示)。

pub mod serde_helpers;

pub mod category;
pub mod image;
pub mod menu;
pub mod menu_item;
pub mod restaurant;
pub mod user;

pub use category::{Category, CategoryCreate, CategoryId, CategoryUpdate};
pub use image::Image;
pub use menu::{Menu, MenuCreate, MenuId, MenuUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use restaurant::{
    CategoryDetails, MenuDetails, Restaurant, RestaurantCreate, RestaurantDetails, RestaurantId,
    RestaurantUpdate,
};
pub use user::{User, UserCreate, UserId};
