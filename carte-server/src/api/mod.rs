//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`restaurants`] - 餐厅管理接口
//! - [`menus`] - 菜单管理接口
//! - [`categories`] - 分类管理接口
//! - [`items`] - 菜品管理接口
//!
//! 除 `/health` 和 `/api/auth/login|register` 外，所有接口都要求
//! Bearer JWT，且只操作当前用户拥有的餐厅数据 ([`guard`])。

pub mod guard;

pub mod auth;
pub mod health;

// Data models API
pub mod categories;
pub mod items;
pub mod menus;
pub mod restaurants;

// Re-export common types for handlers
pub use crate::utils::AppResult;
