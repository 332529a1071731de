//! 预览页 - 未发布菜单的拥有者预览
//!
//! 访问守卫按顺序判定：
//! 1. 无会话 -> 重定向首页（不触发任何数据读取）
//! 2. 餐厅读取失败或不存在 -> 重定向 404 页
//! 3. 会话用户不是拥有者 -> 重定向首页
//! 4. 拥有者 -> 返回预热好的页面数据

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

use super::{HOME_PATH, NOT_FOUND_PATH};
use crate::auth::{CurrentUser, OptionalSession};
use crate::core::ServerState;
use crate::db::models::RestaurantDetails;
use crate::db::repository::{RepoResult, RestaurantRepository};
use crate::security_log;
use crate::view::RestaurantMenuView;

/// Banner text shown above the previewed menu
const PREVIEW_NOTICE: &str =
    "This is a preview of your restaurant menu. Publish the restaurant to make it visible to everyone.";

/// Page payload for an authorized preview request
#[derive(Debug, Serialize)]
pub struct PreviewPage {
    pub notice: &'static str,
    /// Pre-hydrated page state, so clients render without a second fetch
    pub state: PreviewState,
}

#[derive(Debug, Serialize)]
pub struct PreviewState {
    pub restaurant: RestaurantDetails,
    pub menu: RestaurantMenuView,
}

/// Guard outcome for a preview request with an established session
pub(crate) enum PreviewAccess {
    Redirect(&'static str),
    Allow(Box<RestaurantDetails>),
}

/// Decide what an authenticated visitor gets to see
///
/// 读取失败与"不存在"同样落到 404 页，非拥有者静默送回首页。
pub(crate) fn preview_access(
    user: &CurrentUser,
    fetched: RepoResult<Option<RestaurantDetails>>,
) -> PreviewAccess {
    let details = match fetched {
        Ok(Some(details)) => details,
        Ok(None) | Err(_) => return PreviewAccess::Redirect(NOT_FOUND_PATH),
    };

    if details.owner_id() != user.id {
        return PreviewAccess::Redirect(HOME_PATH);
    }

    PreviewAccess::Allow(Box::new(details))
}

/// GET /restaurant/{restaurant_id}/preview
pub async fn preview_page(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
    OptionalSession(session): OptionalSession,
) -> Response {
    // 未登录访问预览链接：直接回首页，不暴露餐厅是否存在
    let Some(user) = session else {
        return Redirect::to(HOME_PATH).into_response();
    };

    let repo = RestaurantRepository::new(state.get_db());
    let fetched = repo.find_details(&restaurant_id).await;

    match preview_access(&user, fetched) {
        PreviewAccess::Redirect(path) => {
            security_log!(
                "WARN",
                "preview_denied",
                user = user.id,
                restaurant = restaurant_id
            );
            Redirect::to(path).into_response()
        }
        PreviewAccess::Allow(details) => {
            let menu = RestaurantMenuView::with_default_tab(&details);
            Json(PreviewPage {
                notice: PREVIEW_NOTICE,
                state: PreviewState {
                    restaurant: *details,
                    menu,
                },
            })
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Restaurant;
    use crate::db::repository::RepoError;
    use surrealdb::RecordId;

    fn user(key: &str) -> CurrentUser {
        CurrentUser {
            id: format!("user:{key}"),
            email: format!("{key}@example.com"),
            display_name: key.to_string(),
        }
    }

    fn details(owner_key: &str) -> RestaurantDetails {
        RestaurantDetails {
            restaurant: Restaurant {
                id: Some(RecordId::from_table_key("restaurant", "r")),
                name: "Sea Breeze".to_string(),
                location: "Galle Road".to_string(),
                user: RecordId::from_table_key("user", owner_key),
                image: None,
                banners: vec![],
                is_published: false,
                created_at: 0,
            },
            menus: vec![],
        }
    }

    #[test]
    fn test_fetch_failure_goes_to_not_found() {
        let access = preview_access(&user("alice"), Err(RepoError::Database("boom".into())));
        assert!(matches!(access, PreviewAccess::Redirect(NOT_FOUND_PATH)));
    }

    #[test]
    fn test_missing_restaurant_goes_to_not_found() {
        let access = preview_access(&user("alice"), Ok(None));
        assert!(matches!(access, PreviewAccess::Redirect(NOT_FOUND_PATH)));
    }

    #[test]
    fn test_non_owner_goes_home() {
        let access = preview_access(&user("mallory"), Ok(Some(details("alice"))));
        assert!(matches!(access, PreviewAccess::Redirect(HOME_PATH)));
    }

    #[test]
    fn test_owner_is_allowed() {
        let access = preview_access(&user("alice"), Ok(Some(details("alice"))));
        match access {
            PreviewAccess::Allow(d) => assert_eq!(d.restaurant.name, "Sea Breeze"),
            PreviewAccess::Redirect(_) => panic!("owner should be allowed"),
        }
    }
}
