//! Management API end-to-end tests
//!
//! Run: cargo test -p carte-server --test menus_api

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use carte_server::{Config, ServerState, build_app_with_state};

async fn test_app() -> (Router, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_str().unwrap(), 0);
    let state = ServerState::initialize(&config).await;
    (build_app_with_state(state), tmp)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Register and login, returning a bearer token
async fn login(app: &Router, email: &str) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"email": email, "password": "hunter2secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": "hunter2secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["token"].as_str().unwrap().to_string()
}

/// Key part of a "table:key" record id string
fn key_of(value: &Value) -> String {
    let id = value.as_str().unwrap();
    id.split_once(':').map(|(_, key)| key).unwrap_or(id).to_string()
}

#[tokio::test]
async fn api_requires_authentication() {
    let (app, _tmp) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/restaurants", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3001");
}

#[tokio::test]
async fn health_is_public() {
    let (app, _tmp) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn login_with_wrong_password_is_rejected() {
    let (app, _tmp) = test_app().await;
    login(&app, "owner@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": "owner@example.com", "password": "wrong-password"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");
}

#[tokio::test]
async fn register_rejects_invalid_payload() {
    let (app, _tmp) = test_app().await;

    // Bad email
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"email": "not-an-email", "password": "hunter2secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    // Short password
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"email": "owner@example.com", "password": "short"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let (app, _tmp) = test_app().await;
    login(&app, "owner@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({"email": "owner@example.com", "password": "hunter2secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");
}

#[tokio::test]
async fn full_menu_management_flow() {
    let (app, _tmp) = test_app().await;
    let token = login(&app, "owner@example.com").await;
    let token = Some(token.as_str());

    // Create a restaurant
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/restaurants",
        token,
        Some(json!({
            "name": "Sea Breeze",
            "location": "Galle Road",
            "image": {"path": "primary.jpg", "color": "#aabbcc", "blur_hash": "LEHV6nWB"},
            "banners": [{"path": "b1.jpg"}]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let restaurant_key = key_of(&body["data"]["id"]);

    // Create a menu
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_key}/menus"),
        token,
        Some(json!({"name": "Lunch", "available_time": "11:00 - 15:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let menu_key = key_of(&body["data"]["id"]);

    // Duplicate menu name within the restaurant is rejected
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_key}/menus"),
        token,
        Some(json!({"name": "Lunch", "available_time": "18:00 - 22:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Create a category and an item
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/menus/{menu_key}/categories"),
        token,
        Some(json!({"name": "Mains"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let category_key = key_of(&body["data"]["id"]);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/categories/{category_key}/items"),
        token,
        Some(json!({
            "name": "Fried Rice",
            "description": "With prawns",
            "price": "12.50"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Fried Rice");

    // Details return the hydrated tree
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/restaurants/{restaurant_key}"),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let details = &body["data"];
    assert_eq!(details["name"], "Sea Breeze");
    assert_eq!(details["menus"][0]["name"], "Lunch");
    assert_eq!(details["menus"][0]["categories"][0]["name"], "Mains");
    assert_eq!(
        details["menus"][0]["categories"][0]["items"][0]["name"],
        "Fried Rice"
    );

    // Dashboard cards: one restaurant, navigable card
    let (status, body) = send(&app, Method::GET, "/api/restaurants/cards", token, None).await;
    assert_eq!(status, StatusCode::OK);
    let cards = body["data"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["title"], "Sea Breeze");
    assert_eq!(cards[0]["wrapper"], "link");
    assert_eq!(
        cards[0]["href"],
        format!("/restaurant/{restaurant_key}/preview")
    );

    // Publish and check the card now points to the public menu page
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_key}/publish"),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_published"], true);

    let (_, body) = send(&app, Method::GET, "/api/restaurants/cards", token, None).await;
    assert_eq!(
        body["data"][0]["href"],
        format!("/restaurant/{restaurant_key}/menu")
    );

    // Delete the restaurant; its tree is gone
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/restaurants/{restaurant_key}"),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/menus/{menu_key}"),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ownership_is_enforced_across_the_chain() {
    let (app, _tmp) = test_app().await;
    let owner = login(&app, "owner@example.com").await;
    let other = login(&app, "other@example.com").await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/restaurants",
        Some(&owner),
        Some(json!({"name": "Sea Breeze", "location": "Galle Road"})),
    )
    .await;
    let restaurant_key = key_of(&body["data"]["id"]);

    let (_, body) = send(
        &app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_key}/menus"),
        Some(&owner),
        Some(json!({"name": "Lunch", "available_time": "11:00 - 15:00"})),
    )
    .await;
    let menu_key = key_of(&body["data"]["id"]);

    // A different user cannot touch the restaurant or anything below it
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/restaurants/{restaurant_key}"),
        Some(&other),
        Some(json!({"name": "Hijacked"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "E2001");

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/menus/{menu_key}/categories"),
        Some(&other),
        Some(json!({"name": "Sneaky"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/restaurants/{restaurant_key}/publish"),
        Some(&other),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The owner still can
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/restaurants/{restaurant_key}"),
        Some(&owner),
        Some(json!({"name": "Sea Breeze II"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
