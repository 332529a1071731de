//! Restaurant menu view model
//!
//! 菜单页的推导逻辑：轮播图序列、标签页选择、分类过滤和空状态。
//! 预览页和已发布菜单页共用同一套推导。

use serde::Serialize;

use crate::db::models::{CategoryDetails, Image, MenuDetails, MenuItem, RestaurantDetails};

/// Banner carousel sequence: primary image first (when present), then the
/// banner collection in its original order
pub fn banner_images(primary: Option<&Image>, banners: &[Image]) -> Vec<Image> {
    match primary {
        Some(image) => {
            let mut images = Vec::with_capacity(banners.len() + 1);
            images.push(image.clone());
            images.extend_from_slice(banners);
            images
        }
        None => banners.to_vec(),
    }
}

/// A menu has visible items iff any of its categories is non-empty
pub fn has_visible_items(categories: &[CategoryDetails]) -> bool {
    categories.iter().any(|category| !category.items.is_empty())
}

/// Categories filtered to non-empty ones, order preserved
pub fn visible_categories(categories: &[CategoryDetails]) -> Vec<&CategoryDetails> {
    categories
        .iter()
        .filter(|category| !category.items.is_empty())
        .collect()
}

/// Tab selection state for the menu page
///
/// Initialized to the first menu's id; the only transition is selecting
/// another tab. The active menu is resolved by linear lookup.
#[derive(Debug, Clone, Default)]
pub struct MenuTabs {
    selected: Option<String>,
}

impl MenuTabs {
    /// Select the first menu by default (or nothing when there are no menus)
    pub fn new(menus: &[MenuDetails]) -> Self {
        let selected = menus
            .first()
            .and_then(|m| m.menu.id.as_ref())
            .map(|id| id.to_string());
        Self { selected }
    }

    /// User picked a tab
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the active menu by id
    pub fn active<'a>(&self, menus: &'a [MenuDetails]) -> Option<&'a MenuDetails> {
        let selected = self.selected.as_deref()?;
        menus.iter().find(|m| {
            m.menu
                .id
                .as_ref()
                .is_some_and(|id| id.to_string() == selected)
        })
    }
}

/// Which empty-state message (if any) the menu page shows
///
/// 注意：菜单列表为空时 "有可见菜品" 必然为假，
/// 所以第一个分支的第二个条件是冗余的；行为以这两个分支为准，
/// 不做"修正"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyMessage {
    /// The restaurant has no menus at all
    NoMenus,
    /// The chosen menu exists but none of its categories has items
    NoItemsInMenu,
}

impl EmptyMessage {
    pub fn text(&self) -> &'static str {
        match self {
            EmptyMessage::NoMenus => {
                "There aren't any menus available for this restaurant. Try checking out later"
            }
            EmptyMessage::NoItemsInMenu => {
                "There aren't any menu items for the chosen restaurant menu. Try checking out later."
            }
        }
    }
}

/// Empty-state policy for the menu page
pub fn empty_state(menus: &[MenuDetails], active: Option<&MenuDetails>) -> Option<EmptyMessage> {
    let have_menu_items = active.is_some_and(|menu| has_visible_items(&menu.categories));

    if menus.is_empty() && !have_menu_items {
        return Some(EmptyMessage::NoMenus);
    }
    if !menus.is_empty() && !have_menu_items {
        return Some(EmptyMessage::NoItemsInMenu);
    }
    None
}

// =============================================================================
// Serializable page view
// =============================================================================

/// One tab in the menu tab list
#[derive(Debug, Clone, Serialize)]
pub struct MenuTab {
    pub id: String,
    pub name: String,
    pub available_time: String,
}

/// A non-empty category with its items, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Empty-state payload with display text
#[derive(Debug, Clone, Serialize)]
pub struct EmptyView {
    pub kind: EmptyMessage,
    pub text: &'static str,
}

/// The complete derived menu page view
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantMenuView {
    pub name: String,
    pub location: String,
    /// Carousel images: primary image first, then banners
    pub banners: Vec<Image>,
    pub tabs: Vec<MenuTab>,
    /// Currently selected menu id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_menu: Option<String>,
    /// Non-empty categories of the active menu, in original order
    pub categories: Vec<CategoryView>,
    /// Empty-state message when the active menu has nothing to show
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyView>,
}

impl RestaurantMenuView {
    /// Derive the page view for the given tab selection
    pub fn build(details: &RestaurantDetails, tabs: &MenuTabs) -> Self {
        let restaurant = &details.restaurant;
        let active = tabs.active(&details.menus);

        let categories = active
            .map(|menu| visible_categories(&menu.categories))
            .unwrap_or_default()
            .into_iter()
            .map(|category| CategoryView {
                id: category
                    .category
                    .id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
                name: category.category.name.clone(),
                items: category.items.clone(),
            })
            .collect();

        Self {
            name: restaurant.name.clone(),
            location: restaurant.location.clone(),
            banners: banner_images(restaurant.image.as_ref(), &restaurant.banners),
            tabs: details
                .menus
                .iter()
                .map(|m| MenuTab {
                    id: m.menu.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
                    name: m.menu.name.clone(),
                    available_time: m.menu.available_time.clone(),
                })
                .collect(),
            selected_menu: tabs.selected().map(str::to_string),
            categories,
            empty: empty_state(&details.menus, active).map(|kind| EmptyView {
                kind,
                text: kind.text(),
            }),
        }
    }

    /// Derive the page view with the default (first) tab selected
    pub fn with_default_tab(details: &RestaurantDetails) -> Self {
        Self::build(details, &MenuTabs::new(&details.menus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Category, Menu, Restaurant};
    use surrealdb::RecordId;

    fn image(path: &str) -> Image {
        Image::new(path)
    }

    fn item(name: &str) -> MenuItem {
        MenuItem {
            id: Some(RecordId::from_table_key("menu_item", name)),
            category: RecordId::from_table_key("category", "c"),
            name: name.to_string(),
            description: String::new(),
            price: "10.00".to_string(),
            image: None,
            sort_order: 0,
        }
    }

    fn category(name: &str, items: Vec<MenuItem>) -> CategoryDetails {
        CategoryDetails {
            category: Category {
                id: Some(RecordId::from_table_key("category", name)),
                menu: RecordId::from_table_key("menu", "m"),
                name: name.to_string(),
                sort_order: 0,
            },
            items,
        }
    }

    fn menu(key: &str, categories: Vec<CategoryDetails>) -> MenuDetails {
        MenuDetails {
            menu: Menu {
                id: Some(RecordId::from_table_key("menu", key)),
                restaurant: RecordId::from_table_key("restaurant", "r"),
                name: key.to_string(),
                available_time: "11:00 - 15:00".to_string(),
                sort_order: 0,
            },
            categories,
        }
    }

    fn details(menus: Vec<MenuDetails>, primary: Option<Image>, banners: Vec<Image>) -> RestaurantDetails {
        RestaurantDetails {
            restaurant: Restaurant {
                id: Some(RecordId::from_table_key("restaurant", "r")),
                name: "Sea Breeze".to_string(),
                location: "Galle Road".to_string(),
                user: RecordId::from_table_key("user", "u"),
                image: primary,
                banners,
                is_published: true,
                created_at: 0,
            },
            menus,
        }
    }

    #[test]
    fn test_banner_images_with_primary() {
        let primary = image("primary.jpg");
        let banners = vec![image("b1.jpg"), image("b2.jpg")];
        let images = banner_images(Some(&primary), &banners);
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].path, "primary.jpg");
        assert_eq!(images[1].path, "b1.jpg");
        assert_eq!(images[2].path, "b2.jpg");
    }

    #[test]
    fn test_banner_images_without_primary() {
        let banners = vec![image("b1.jpg"), image("b2.jpg")];
        assert_eq!(banner_images(None, &banners), banners);
    }

    #[test]
    fn test_banner_images_all_empty() {
        assert!(banner_images(None, &[]).is_empty());
    }

    #[test]
    fn test_has_visible_items() {
        let categories = vec![category("empty", vec![]), category("mains", vec![item("rice")])];
        assert!(has_visible_items(&categories));
        assert!(!has_visible_items(&[category("empty", vec![])]));
        assert!(!has_visible_items(&[]));
    }

    #[test]
    fn test_visible_categories_preserves_order() {
        let categories = vec![
            category("starters", vec![item("soup")]),
            category("empty", vec![]),
            category("mains", vec![item("rice"), item("noodles")]),
        ];
        let visible = visible_categories(&categories);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].category.name, "starters");
        assert_eq!(visible[1].category.name, "mains");
    }

    #[test]
    fn test_tabs_default_to_first_menu() {
        let menus = vec![menu("lunch", vec![]), menu("dinner", vec![])];
        let tabs = MenuTabs::new(&menus);
        assert_eq!(tabs.selected(), Some("menu:lunch"));
        assert_eq!(tabs.active(&menus).unwrap().menu.name, "lunch");
    }

    #[test]
    fn test_tabs_unset_when_no_menus() {
        let tabs = MenuTabs::new(&[]);
        assert_eq!(tabs.selected(), None);
        assert!(tabs.active(&[]).is_none());
    }

    #[test]
    fn test_select_switches_active_menu() {
        let menus = vec![
            menu("lunch", vec![category("a", vec![item("x")])]),
            menu("dinner", vec![category("b", vec![item("y")])]),
        ];
        let mut tabs = MenuTabs::new(&menus);
        tabs.select("menu:dinner");
        assert_eq!(tabs.active(&menus).unwrap().menu.name, "dinner");
    }

    #[test]
    fn test_empty_state_no_menus() {
        assert_eq!(empty_state(&[], None), Some(EmptyMessage::NoMenus));
    }

    #[test]
    fn test_empty_state_itemless_menu() {
        let menus = vec![menu("lunch", vec![category("empty", vec![])])];
        let active = Some(&menus[0]);
        assert_eq!(empty_state(&menus, active), Some(EmptyMessage::NoItemsInMenu));
    }

    #[test]
    fn test_empty_state_none_when_items_exist() {
        let menus = vec![menu("lunch", vec![category("mains", vec![item("rice")])])];
        let active = Some(&menus[0]);
        assert_eq!(empty_state(&menus, active), None);
    }

    #[test]
    fn test_build_filters_categories_for_selected_tab() {
        let menus = vec![
            menu(
                "lunch",
                vec![category("starters", vec![]), category("mains", vec![item("rice")])],
            ),
            menu("dinner", vec![category("grill", vec![item("kebab")])]),
        ];
        let details = details(menus, Some(image("primary.jpg")), vec![image("b1.jpg")]);

        let mut tabs = MenuTabs::new(&details.menus);
        tabs.select("menu:dinner");
        let view = RestaurantMenuView::build(&details, &tabs);

        assert_eq!(view.banners.len(), 2);
        assert_eq!(view.tabs.len(), 2);
        assert_eq!(view.selected_menu.as_deref(), Some("menu:dinner"));
        assert_eq!(view.categories.len(), 1);
        assert_eq!(view.categories[0].name, "grill");
        assert!(view.empty.is_none());
    }

    #[test]
    fn test_build_with_default_tab_shows_empty_message() {
        let details = details(vec![], None, vec![]);
        let view = RestaurantMenuView::with_default_tab(&details);
        assert!(view.categories.is_empty());
        assert_eq!(view.empty.unwrap().kind, EmptyMessage::NoMenus);
    }
}
