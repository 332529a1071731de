//! MenuItem API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/categories/{category_id}/items | GET | 分类的菜品列表 |
//! | /api/categories/{category_id}/items | POST | 创建菜品 |
//! | /api/items/{item_id} | GET | 获取菜品 |
//! | /api/items/{item_id} | PUT | 更新菜品 |
//! | /api/items/{item_id} | DELETE | 删除菜品 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/categories/{category_id}/items",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/items/{item_id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
