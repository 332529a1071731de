//! MenuItem API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::guard;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::{MenuItemRepository, record_id};
use crate::utils::{AppResult, ok};
use shared::ApiResponse;

/// GET /api/categories/{category_id}/items - 分类的菜品列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(category_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<MenuItem>>>> {
    let db = state.get_db();
    guard::owned_category(&db, &user, &category_id).await?;

    let items = MenuItemRepository::new(db)
        .find_by_category(&record_id("category", &category_id))
        .await?;
    Ok(ok(items))
}

/// POST /api/categories/{category_id}/items - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(category_id): Path<String>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    payload.validate()?;

    let db = state.get_db();
    guard::owned_category(&db, &user, &category_id).await?;

    let item = MenuItemRepository::new(db)
        .create(record_id("category", &category_id), payload)
        .await?;
    Ok(ok(item))
}

/// GET /api/items/{item_id} - 获取菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(item_id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let db = state.get_db();
    let item = guard::owned_item(&db, &user, &item_id).await?;
    Ok(ok(item))
}

/// PUT /api/items/{item_id} - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(item_id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    payload.validate()?;

    let db = state.get_db();
    guard::owned_item(&db, &user, &item_id).await?;

    let item = MenuItemRepository::new(db).update(&item_id, payload).await?;
    Ok(ok(item))
}

/// DELETE /api/items/{item_id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(item_id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let db = state.get_db();
    guard::owned_item(&db, &user, &item_id).await?;

    let deleted = MenuItemRepository::new(db).delete(&item_id).await?;
    Ok(ok(deleted))
}
