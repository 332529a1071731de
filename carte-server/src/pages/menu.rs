//! 已发布菜单页 - 公开访问
//!
//! 只有 `is_published = true` 的餐厅才对外可见；
//! 未发布、不存在或读取失败一律重定向到 404 页。

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

use super::NOT_FOUND_PATH;
use crate::core::ServerState;
use crate::db::repository::RestaurantRepository;
use crate::view::RestaurantMenuView;

/// Page payload for a published menu
#[derive(Debug, Serialize)]
pub struct MenuPage {
    pub menu: RestaurantMenuView,
}

/// GET /restaurant/{restaurant_id}/menu
pub async fn menu_page(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
) -> Response {
    let repo = RestaurantRepository::new(state.get_db());

    let details = match repo.find_details(&restaurant_id).await {
        Ok(Some(details)) => details,
        Ok(None) | Err(_) => return Redirect::to(NOT_FOUND_PATH).into_response(),
    };

    if !details.restaurant.is_published {
        return Redirect::to(NOT_FOUND_PATH).into_response();
    }

    Json(MenuPage {
        menu: RestaurantMenuView::with_default_tab(&details),
    })
    .into_response()
}
