//! Menu API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/restaurants/{restaurant_id}/menus | GET | 餐厅的菜单列表 |
//! | /api/restaurants/{restaurant_id}/menus | POST | 创建菜单 |
//! | /api/menus/{menu_id} | GET | 获取菜单 |
//! | /api/menus/{menu_id} | PUT | 更新菜单 |
//! | /api/menus/{menu_id} | DELETE | 删除菜单及其分类/菜品 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/restaurants/{restaurant_id}/menus",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/menus/{menu_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
