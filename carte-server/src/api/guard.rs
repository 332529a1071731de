//! 所有权守卫
//!
//! 管理接口只允许操作当前用户拥有的数据。菜单/分类/菜品沿父链
//! (item -> category -> menu -> restaurant -> user) 逐级解析到餐厅，
//! 再比对拥有者。非拥有者一律返回 403。

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::CurrentUser;
use crate::db::models::{Category, Menu, MenuItem, Restaurant};
use crate::db::repository::{
    CategoryRepository, MenuItemRepository, MenuRepository, RestaurantRepository,
};
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Resolve a restaurant and ensure the user owns it
pub async fn owned_restaurant(
    db: &Surreal<Db>,
    user: &CurrentUser,
    restaurant_id: &str,
) -> AppResult<Restaurant> {
    let restaurant = RestaurantRepository::new(db.clone())
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {} not found", restaurant_id)))?;

    if restaurant.user.to_string() != user.id {
        security_log!(
            "WARN",
            "ownership_denied",
            user = user.id,
            restaurant = restaurant_id
        );
        return Err(AppError::forbidden("Not the owner of this restaurant"));
    }

    Ok(restaurant)
}

/// Resolve a menu and ensure the user owns its restaurant
pub async fn owned_menu(db: &Surreal<Db>, user: &CurrentUser, menu_id: &str) -> AppResult<Menu> {
    let menu = MenuRepository::new(db.clone())
        .find_by_id(menu_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu {} not found", menu_id)))?;

    owned_restaurant(db, user, &menu.restaurant.to_string()).await?;
    Ok(menu)
}

/// Resolve a category and ensure the user owns its restaurant
pub async fn owned_category(
    db: &Surreal<Db>,
    user: &CurrentUser,
    category_id: &str,
) -> AppResult<Category> {
    let category = CategoryRepository::new(db.clone())
        .find_by_id(category_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {} not found", category_id)))?;

    owned_menu(db, user, &category.menu.to_string()).await?;
    Ok(category)
}

/// Resolve a menu item and ensure the user owns its restaurant
pub async fn owned_item(
    db: &Surreal<Db>,
    user: &CurrentUser,
    item_id: &str,
) -> AppResult<MenuItem> {
    let item = MenuItemRepository::new(db.clone())
        .find_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", item_id)))?;

    owned_category(db, user, &item.category.to_string()).await?;
    Ok(item)
}
