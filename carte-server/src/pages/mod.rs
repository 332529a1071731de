//! 页面路由 - 预览页与已发布菜单页
//!
//! 这些路由不走 `/api` 认证中间件：失败路径一律是静默的 303 重定向
//! (首页或 404 页)，而不是 JSON 错误。
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 访问控制 |
//! |------|------|------|----------|
//! | /restaurant/{restaurant_id}/preview | GET | 未发布菜单预览 | 仅餐厅拥有者 |
//! | /restaurant/{restaurant_id}/menu | GET | 已发布菜单 | 公开 |

pub mod menu;
pub mod preview;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// 页面重定向目标
pub(crate) const HOME_PATH: &str = "/";
pub(crate) const NOT_FOUND_PATH: &str = "/404";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/restaurant/{restaurant_id}/preview",
            get(preview::preview_page),
        )
        .route("/restaurant/{restaurant_id}/menu", get(menu::menu_page))
}
