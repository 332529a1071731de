//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::guard;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::db::repository::{CategoryRepository, record_id};
use crate::utils::{AppResult, ok};
use shared::ApiResponse;

/// GET /api/menus/{menu_id}/categories - 菜单的分类列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(menu_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let db = state.get_db();
    guard::owned_menu(&db, &user, &menu_id).await?;

    let categories = CategoryRepository::new(db)
        .find_by_menu(&record_id("menu", &menu_id))
        .await?;
    Ok(ok(categories))
}

/// POST /api/menus/{menu_id}/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(menu_id): Path<String>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<ApiResponse<Category>>> {
    payload.validate()?;

    let db = state.get_db();
    guard::owned_menu(&db, &user, &menu_id).await?;

    let category = CategoryRepository::new(db)
        .create(record_id("menu", &menu_id), payload)
        .await?;
    Ok(ok(category))
}

/// GET /api/categories/{category_id} - 获取分类
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(category_id): Path<String>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let db = state.get_db();
    let category = guard::owned_category(&db, &user, &category_id).await?;
    Ok(ok(category))
}

/// PUT /api/categories/{category_id} - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(category_id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<ApiResponse<Category>>> {
    payload.validate()?;

    let db = state.get_db();
    guard::owned_category(&db, &user, &category_id).await?;

    let category = CategoryRepository::new(db)
        .update(&category_id, payload)
        .await?;
    Ok(ok(category))
}

/// DELETE /api/categories/{category_id} - 删除分类及其菜品
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(category_id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let db = state.get_db();
    guard::owned_category(&db, &user, &category_id).await?;

    let deleted = CategoryRepository::new(db).delete(&category_id).await?;
    Ok(ok(deleted))
}
