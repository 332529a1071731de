//! 视图模型推导 - 纯函数，不依赖渲染层
//!
//! # 模块结构
//!
//! - [`card`] - 图片卡片与链接守卫
//! - [`menu`] - 轮播图序列、菜单标签页、空状态策略

pub mod card;
pub mod menu;

pub use card::{EditDeleteOptions, ImageCard, ImageCardView, WrapperKind, choose_wrapper};
pub use menu::{EmptyMessage, MenuTabs, RestaurantMenuView, banner_images, has_visible_items};
