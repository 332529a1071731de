//! Category API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/menus/{menu_id}/categories | GET | 菜单的分类列表 |
//! | /api/menus/{menu_id}/categories | POST | 创建分类 |
//! | /api/categories/{category_id} | GET | 获取分类 |
//! | /api/categories/{category_id} | PUT | 更新分类 |
//! | /api/categories/{category_id} | DELETE | 删除分类及其菜品 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/menus/{menu_id}/categories",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/categories/{category_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
