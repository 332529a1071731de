//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::guard;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Menu, MenuCreate, MenuUpdate};
use crate::db::repository::{MenuRepository, record_id};
use crate::utils::{AppResult, ok};
use shared::ApiResponse;

/// GET /api/restaurants/{restaurant_id}/menus - 餐厅的菜单列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Menu>>>> {
    let db = state.get_db();
    guard::owned_restaurant(&db, &user, &restaurant_id).await?;

    let menus = MenuRepository::new(db)
        .find_by_restaurant(&record_id("restaurant", &restaurant_id))
        .await?;
    Ok(ok(menus))
}

/// POST /api/restaurants/{restaurant_id}/menus - 创建菜单
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(restaurant_id): Path<String>,
    Json(payload): Json<MenuCreate>,
) -> AppResult<Json<ApiResponse<Menu>>> {
    payload.validate()?;

    let db = state.get_db();
    guard::owned_restaurant(&db, &user, &restaurant_id).await?;

    let menu = MenuRepository::new(db)
        .create(record_id("restaurant", &restaurant_id), payload)
        .await?;
    Ok(ok(menu))
}

/// GET /api/menus/{menu_id} - 获取菜单
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(menu_id): Path<String>,
) -> AppResult<Json<ApiResponse<Menu>>> {
    let db = state.get_db();
    let menu = guard::owned_menu(&db, &user, &menu_id).await?;
    Ok(ok(menu))
}

/// PUT /api/menus/{menu_id} - 更新菜单
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(menu_id): Path<String>,
    Json(payload): Json<MenuUpdate>,
) -> AppResult<Json<ApiResponse<Menu>>> {
    payload.validate()?;

    let db = state.get_db();
    guard::owned_menu(&db, &user, &menu_id).await?;

    let menu = MenuRepository::new(db).update(&menu_id, payload).await?;
    Ok(ok(menu))
}

/// DELETE /api/menus/{menu_id} - 删除菜单及其分类/菜品
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(menu_id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let db = state.get_db();
    guard::owned_menu(&db, &user, &menu_id).await?;

    let deleted = MenuRepository::new(db).delete(&menu_id).await?;
    Ok(ok(deleted))
}
