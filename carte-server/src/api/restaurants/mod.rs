//! Restaurant API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/restaurants | GET | 当前用户的餐厅列表 |
//! | /api/restaurants | POST | 创建餐厅 |
//! | /api/restaurants/cards | GET | 控制台卡片视图 |
//! | /api/restaurants/{restaurant_id} | GET | 餐厅详情 (含完整菜单树) |
//! | /api/restaurants/{restaurant_id} | PUT | 更新餐厅 |
//! | /api/restaurants/{restaurant_id} | DELETE | 删除餐厅及其菜单树 |
//! | /api/restaurants/{restaurant_id}/publish | POST | 发布 |
//! | /api/restaurants/{restaurant_id}/unpublish | POST | 取消发布 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/restaurants", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Dashboard cards (must be before /{restaurant_id} to avoid path conflicts)
        .route("/cards", get(handler::cards))
        .route(
            "/{restaurant_id}",
            get(handler::get_details)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{restaurant_id}/publish", post(handler::publish))
        .route("/{restaurant_id}/unpublish", post(handler::unpublish))
}
