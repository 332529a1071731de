//! Restaurant API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::guard;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Restaurant, RestaurantCreate, RestaurantDetails, RestaurantUpdate};
use crate::db::repository::{RestaurantRepository, record_id};
use crate::utils::{AppError, AppResult, ok};
use crate::view::{EditDeleteOptions, ImageCard, ImageCardView};
use shared::ApiResponse;

/// GET /api/restaurants - 当前用户的餐厅列表
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<Restaurant>>>> {
    let repo = RestaurantRepository::new(state.get_db());
    let restaurants = repo.find_by_user(&record_id("user", &user.id)).await?;
    Ok(ok(restaurants))
}

/// GET /api/restaurants/cards - 控制台卡片视图
///
/// 每家餐厅一张背景图卡片：已发布的链接到公开菜单页，
/// 未发布的链接到预览页。
pub async fn cards(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<ImageCardView>>>> {
    let repo = RestaurantRepository::new(state.get_db());
    let restaurants = repo.find_by_user(&record_id("user", &user.id)).await?;

    let cards = restaurants
        .into_iter()
        .map(|r| {
            let key = r.id.as_ref().map(|id| id.key().to_string());
            let href = key.map(|key| {
                if r.is_published {
                    format!("/restaurant/{key}/menu")
                } else {
                    format!("/restaurant/{key}/preview")
                }
            });
            ImageCard {
                image: r.image,
                image_alt: Some(r.name.clone()),
                title: Some(r.name),
                sub_title: Some(r.location),
                href,
                target: None,
                edit_delete_options: Some(EditDeleteOptions::default()),
            }
            .into_view()
        })
        .collect();

    Ok(ok(cards))
}

/// POST /api/restaurants - 创建餐厅
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<RestaurantCreate>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    payload.validate()?;

    let repo = RestaurantRepository::new(state.get_db());
    let restaurant = repo.create(record_id("user", &user.id), payload).await?;

    tracing::info!(
        user_id = %user.id,
        name = %restaurant.name,
        "Restaurant created"
    );

    Ok(ok(restaurant))
}

/// GET /api/restaurants/{restaurant_id} - 餐厅详情 (含完整菜单树)
pub async fn get_details(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<ApiResponse<RestaurantDetails>>> {
    let db = state.get_db();
    guard::owned_restaurant(&db, &user, &restaurant_id).await?;

    let repo = RestaurantRepository::new(db);
    let details = repo
        .find_details(&restaurant_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Restaurant {} not found", restaurant_id))
        })?;

    Ok(ok(details))
}

/// PUT /api/restaurants/{restaurant_id} - 更新餐厅
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(restaurant_id): Path<String>,
    Json(payload): Json<RestaurantUpdate>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    payload.validate()?;

    let db = state.get_db();
    guard::owned_restaurant(&db, &user, &restaurant_id).await?;

    let restaurant = RestaurantRepository::new(db)
        .update(&restaurant_id, payload)
        .await?;

    Ok(ok(restaurant))
}

/// DELETE /api/restaurants/{restaurant_id} - 删除餐厅及其菜单树
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<ApiResponse<bool>>> {
    let db = state.get_db();
    guard::owned_restaurant(&db, &user, &restaurant_id).await?;

    let deleted = RestaurantRepository::new(db).delete(&restaurant_id).await?;

    tracing::info!(
        user_id = %user.id,
        restaurant = %restaurant_id,
        "Restaurant deleted"
    );

    Ok(ok(deleted))
}

/// POST /api/restaurants/{restaurant_id}/publish - 发布
pub async fn publish(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    set_published(state, user, restaurant_id, true).await
}

/// POST /api/restaurants/{restaurant_id}/unpublish - 取消发布
pub async fn unpublish(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    set_published(state, user, restaurant_id, false).await
}

async fn set_published(
    state: ServerState,
    user: CurrentUser,
    restaurant_id: String,
    is_published: bool,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    let db = state.get_db();
    guard::owned_restaurant(&db, &user, &restaurant_id).await?;

    let restaurant = RestaurantRepository::new(db)
        .set_published(&restaurant_id, is_published)
        .await?;

    tracing::info!(
        user_id = %user.id,
        restaurant = %restaurant_id,
        is_published,
        "Restaurant publish state changed"
    );

    Ok(ok(restaurant))
}
