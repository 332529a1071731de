//! Preview page access control tests
//!
//! Run: cargo test -p carte-server --test preview_access

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use carte_server::db::models::{RestaurantCreate, UserCreate};
use carte_server::db::repository::{RestaurantRepository, UserRepository, record_id};
use carte_server::{Config, ServerState, build_app_with_state};

async fn test_state() -> (ServerState, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await;
    (state, tmp)
}

/// Seed a user directly and return (user_id, bearer token)
async fn seed_user(state: &ServerState, email: &str) -> (String, String) {
    let user = UserRepository::new(state.get_db())
        .create(UserCreate {
            email: email.to_string(),
            password: "hunter2secret".to_string(),
            display_name: None,
        })
        .await
        .unwrap();

    let user_id = user.id.as_ref().unwrap().to_string();
    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.email, &user.display_name)
        .unwrap();
    (user_id, token)
}

/// Seed a restaurant owned by the given user, returns its key (id without table prefix)
async fn seed_restaurant(state: &ServerState, user_id: &str, name: &str) -> String {
    let restaurant = RestaurantRepository::new(state.get_db())
        .create(
            record_id("user", user_id),
            RestaurantCreate {
                name: name.to_string(),
                location: "Galle Road".to_string(),
                image: None,
                banners: vec![],
            },
        )
        .await
        .unwrap();
    restaurant.id.as_ref().unwrap().key().to_string()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn preview_without_session_redirects_home() {
    let (state, _tmp) = test_state().await;
    let (owner_id, _token) = seed_user(&state, "owner@example.com").await;
    let key = seed_restaurant(&state, &owner_id, "Sea Breeze").await;

    let app = build_app_with_state(state);
    let response = app
        .oneshot(get(&format!("/restaurant/{key}/preview"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn preview_with_invalid_token_redirects_home() {
    let (state, _tmp) = test_state().await;
    let (owner_id, _token) = seed_user(&state, "owner@example.com").await;
    let key = seed_restaurant(&state, &owner_id, "Sea Breeze").await;

    let app = build_app_with_state(state);
    let response = app
        .oneshot(get(
            &format!("/restaurant/{key}/preview"),
            Some("not-a-real-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn preview_of_unknown_restaurant_redirects_to_not_found() {
    let (state, _tmp) = test_state().await;
    let (_owner_id, token) = seed_user(&state, "owner@example.com").await;

    let app = build_app_with_state(state);
    let response = app
        .oneshot(get("/restaurant/doesnotexist/preview", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/404");
}

#[tokio::test]
async fn preview_by_non_owner_redirects_home() {
    let (state, _tmp) = test_state().await;
    let (owner_id, _owner_token) = seed_user(&state, "owner@example.com").await;
    let (_other_id, other_token) = seed_user(&state, "other@example.com").await;
    let key = seed_restaurant(&state, &owner_id, "Sea Breeze").await;

    let app = build_app_with_state(state);
    let response = app
        .oneshot(get(&format!("/restaurant/{key}/preview"), Some(&other_token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn preview_by_owner_returns_hydrated_page() {
    let (state, _tmp) = test_state().await;
    let (owner_id, token) = seed_user(&state, "owner@example.com").await;
    let key = seed_restaurant(&state, &owner_id, "Sea Breeze").await;

    let app = build_app_with_state(state);
    let response = app
        .oneshot(get(&format!("/restaurant/{key}/preview"), Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let page: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // Page state is pre-hydrated with the fetched restaurant
    assert_eq!(page["state"]["restaurant"]["name"], "Sea Breeze");
    assert_eq!(page["state"]["menu"]["name"], "Sea Breeze");
    // No menus yet: the empty-state message is present
    assert_eq!(page["state"]["menu"]["empty"]["kind"], "no_menus");
    assert!(page["notice"].is_string());
}

#[tokio::test]
async fn published_menu_page_is_public() {
    let (state, _tmp) = test_state().await;
    let (owner_id, _token) = seed_user(&state, "owner@example.com").await;
    let key = seed_restaurant(&state, &owner_id, "Sea Breeze").await;

    RestaurantRepository::new(state.get_db())
        .set_published(&key, true)
        .await
        .unwrap();

    let app = build_app_with_state(state);
    let response = app
        .oneshot(get(&format!("/restaurant/{key}/menu"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let page: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(page["menu"]["name"], "Sea Breeze");
}

#[tokio::test]
async fn unpublished_menu_page_redirects_to_not_found() {
    let (state, _tmp) = test_state().await;
    let (owner_id, _token) = seed_user(&state, "owner@example.com").await;
    let key = seed_restaurant(&state, &owner_id, "Sea Breeze").await;

    let app = build_app_with_state(state);
    let response = app
        .oneshot(get(&format!("/restaurant/{key}/menu"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/404");
}
