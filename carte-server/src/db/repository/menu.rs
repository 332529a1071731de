//! Menu Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Menu, MenuCreate, MenuUpdate, RestaurantId};

const TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menus of a restaurant ordered by sort_order
    pub async fn find_by_restaurant(&self, restaurant: &RestaurantId) -> RepoResult<Vec<Menu>> {
        let menus: Vec<Menu> = self
            .base
            .db()
            .query("SELECT * FROM menu WHERE restaurant = $restaurant ORDER BY sort_order")
            .bind(("restaurant", restaurant.clone()))
            .await?
            .take(0)?;
        Ok(menus)
    }

    /// Find menu by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        let menu: Option<Menu> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(menu)
    }

    /// Find menu by name within a restaurant
    pub async fn find_by_name(
        &self,
        restaurant: &RestaurantId,
        name: &str,
    ) -> RepoResult<Option<Menu>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu WHERE restaurant = $restaurant AND name = $name LIMIT 1")
            .bind(("restaurant", restaurant.clone()))
            .bind(("name", name_owned))
            .await?;
        let menus: Vec<Menu> = result.take(0)?;
        Ok(menus.into_iter().next())
    }

    /// Create a new menu under a restaurant
    pub async fn create(&self, restaurant: RestaurantId, data: MenuCreate) -> RepoResult<Menu> {
        // Check duplicate name within the restaurant
        if self.find_by_name(&restaurant, &data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Menu '{}' already exists",
                data.name
            )));
        }

        let menu = Menu {
            id: None,
            restaurant,
            name: data.name,
            available_time: data.available_time,
            sort_order: data.sort_order.unwrap_or(0),
        };

        let created: Option<Menu> = self.base.db().create(TABLE).content(menu).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu".to_string()))
    }

    /// Update a menu
    pub async fn update(&self, id: &str, data: MenuUpdate) -> RepoResult<Menu> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu {} not found", id)))?;

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self
                .find_by_name(&existing.restaurant, new_name)
                .await?
                .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Menu '{}' already exists",
                new_name
            )));
        }

        #[derive(Serialize)]
        struct MenuUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            available_time: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort_order: Option<i32>,
        }

        let update_data = MenuUpdateDb {
            name: data.name,
            available_time: data.available_time,
            sort_order: data.sort_order,
        };

        let thing = record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", update_data))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu {} not found", id)))
    }

    /// Hard delete a menu with its categories and items
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = record_id(TABLE, id);

        self.base
            .db()
            .query("DELETE menu_item WHERE category.menu = $thing")
            .query("DELETE category WHERE menu = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;

        Ok(true)
    }
}
