//! Restaurant Repository

use serde::Serialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, CategoryRepository, MenuItemRepository, MenuRepository};
use super::{RepoError, RepoResult, record_id};
use crate::db::models::{
    CategoryDetails, Image, MenuDetails, Restaurant, RestaurantCreate, RestaurantDetails,
    RestaurantUpdate, UserId,
};

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all restaurants owned by a user, newest first
    pub async fn find_by_user(&self, user: &UserId) -> RepoResult<Vec<Restaurant>> {
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query("SELECT * FROM restaurant WHERE user = $user ORDER BY created_at DESC")
            .bind(("user", user.clone()))
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Find restaurant by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(restaurant)
    }

    /// Create a new restaurant owned by the given user
    pub async fn create(&self, user: UserId, data: RestaurantCreate) -> RepoResult<Restaurant> {
        let restaurant = Restaurant {
            id: None,
            name: data.name,
            location: data.location,
            user,
            image: data.image,
            banners: data.banners,
            is_published: false,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        let created: Option<Restaurant> =
            self.base.db().create(TABLE).content(restaurant).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }

    /// Update a restaurant
    pub async fn update(&self, id: &str, data: RestaurantUpdate) -> RepoResult<Restaurant> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)))?;

        #[derive(Serialize)]
        struct RestaurantUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            location: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image: Option<Image>,
            #[serde(skip_serializing_if = "Option::is_none")]
            banners: Option<Vec<Image>>,
        }

        let update_data = RestaurantUpdateDb {
            name: data.name,
            location: data.location,
            image: data.image,
            banners: data.banners,
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
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)))
    }

    /// Set the published flag
    pub async fn set_published(&self, id: &str, is_published: bool) -> RepoResult<Restaurant> {
        let thing = record_id(TABLE, id);
        self.base
            .db()
            .query("UPDATE $thing SET is_published = $published")
            .bind(("thing", thing))
            .bind(("published", is_published))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)))
    }

    /// Hard delete a restaurant and its menu tree
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = record_id(TABLE, id);

        // Delete the whole subtree bottom-up
        self.base
            .db()
            .query("DELETE menu_item WHERE category.menu.restaurant = $thing")
            .query("DELETE category WHERE menu.restaurant = $thing")
            .query("DELETE menu WHERE restaurant = $thing")
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;

        Ok(true)
    }

    /// Fetch the restaurant with its full menu tree hydrated
    ///
    /// Menus, categories and items each come back in sort order.
    pub async fn find_details(&self, id: &str) -> RepoResult<Option<RestaurantDetails>> {
        let Some(restaurant) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let restaurant_id: RecordId = restaurant
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Restaurant record missing id".to_string()))?;

        let menu_repo = MenuRepository::new(self.base.db().clone());
        let category_repo = CategoryRepository::new(self.base.db().clone());
        let item_repo = MenuItemRepository::new(self.base.db().clone());

        let mut menus = Vec::new();
        for menu in menu_repo.find_by_restaurant(&restaurant_id).await? {
            let menu_id = menu
                .id
                .clone()
                .ok_or_else(|| RepoError::Database("Menu record missing id".to_string()))?;

            let mut categories = Vec::new();
            for category in category_repo.find_by_menu(&menu_id).await? {
                let category_id = category
                    .id
                    .clone()
                    .ok_or_else(|| RepoError::Database("Category record missing id".to_string()))?;

                let items = item_repo.find_by_category(&category_id).await?;
                categories.push(CategoryDetails { category, items });
            }

            menus.push(MenuDetails { menu, categories });
        }

        Ok(Some(RestaurantDetails { restaurant, menus }))
    }
}
