//! Router tests driven through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use tower::ServiceExt;

use super::{build_router, USER_ID_HEADER};
use crate::config::Config;
use crate::repository::init_db;
use crate::state::AppState;

async fn test_app() -> Router {
    let db = init_db(&PathBuf::from(":memory:")).await.expect("Failed to init test DB");
    build_router(AppState::new(&db, Config::default()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user_id: Option<u32>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(id) = user_id {
        request = request.header(USER_ID_HEADER, id.to_string());
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn sign_up(app: &Router, telegram_id: i64, referral_code: Option<&str>) -> Value {
    let mut body = json!({ "telegram_id": telegram_id, "first_name": "Анна" });
    if let Some(code) = referral_code {
        body["referral_code"] = json!(code);
    }
    let (status, value) = send(app, Method::POST, "/api/auth", None, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    value["user"].clone()
}

fn id_of(value: &Value) -> u32 {
    value["id"].as_u64().unwrap() as u32
}

#[tokio::test]
async fn test_products_filtering() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/products", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 8);

    let (_, body) = send(&app, Method::GET, "/api/products?category=all", None, None).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 8);

    let (_, body) = send(&app, Method::GET, "/api/products?category=shooter", None, None).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["title"], "Battlefield 2042");
    assert_eq!(products[0]["old_price"], 2999);
}

#[tokio::test]
async fn test_auth_requires_telegram_id() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/api/auth", None, Some(json!({ "username": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "telegram_id is required" }));
}

#[tokio::test]
async fn test_auth_creates_then_returns_existing() {
    let app = test_app().await;
    let user = sign_up(&app, 555, None).await;
    assert_eq!(user["balance"], 1000);
    assert_eq!(user["referral_code"].as_str().unwrap().len(), 8);

    let (status, body) = send(&app, Method::POST, "/api/auth", None, Some(json!({ "telegram_id": 555 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], user["id"]);
}

#[tokio::test]
async fn test_user_requires_header_and_known_user() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));

    let (status, body) = send(&app, Method::GET, "/api/user", Some(404), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "User not found" }));
}

#[tokio::test]
async fn test_referral_flow_shows_in_user_data() {
    let app = test_app().await;
    let referrer = sign_up(&app, 1, None).await;
    let code = referrer["referral_code"].as_str().unwrap().to_string();
    let invited = sign_up(&app, 2, Some(&code)).await;
    assert_eq!(invited["referred_by_id"], referrer["id"]);

    let (status, data) = send(&app, Method::GET, "/api/user", Some(id_of(&referrer)), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["user"]["balance"], 1100);
    assert_eq!(data["referrals_count"], 1);
    assert_eq!(data["notifications"][0]["title"], "Новый реферал!");
    assert_eq!(data["notifications"][0]["type"], "success");
    assert_eq!(data["notifications"][0]["is_read"], false);
}

#[tokio::test]
async fn test_checkout_flow() {
    let app = test_app().await;
    let user = sign_up(&app, 77, None).await;
    let user_id = id_of(&user);

    // Client price is ignored; The Witcher 3 costs 899
    let order_body = json!({ "items": [{ "product_id": 3, "quantity": 1, "price": 1 }] });
    let (status, body) = send(&app, Method::POST, "/api/orders", Some(user_id), Some(order_body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let order = body["order"].clone();
    assert_eq!(order["total"], 899);
    assert_eq!(order["status"], "completed");

    let (_, data) = send(&app, Method::GET, "/api/user", Some(user_id), None).await;
    assert_eq!(data["user"]["balance"], 101);
    assert_eq!(data["orders"].as_array().unwrap().len(), 1);
    assert_eq!(data["orders"][0]["items_count"], 1);
    assert_eq!(data["notifications"][0]["title"], "Заказ оформлен");

    let uri = format!("/api/orders/{}", order["id"]);
    let (status, details) = send(&app, Method::GET, &uri, Some(user_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["items"][0]["title"], "The Witcher 3");

    let stranger = sign_up(&app, 78, None).await;
    let (status, _) = send(&app, Method::GET, &uri, Some(id_of(&stranger)), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_rejections() {
    let app = test_app().await;
    let user_id = id_of(&sign_up(&app, 90, None).await);

    let (status, body) = send(&app, Method::POST, "/api/orders", None, Some(json!({ "items": [] }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, body) = send(&app, Method::POST, "/api/orders", Some(user_id), Some(json!({ "items": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No items in order");

    let too_much = json!({ "items": [{ "product_id": 6, "quantity": 1, "price": 3499 }] });
    let (status, body) = send(&app, Method::POST, "/api/orders", Some(user_id), Some(too_much)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Insufficient balance");

    let zero = json!({ "items": [{ "product_id": 3, "quantity": 0 }] });
    let (status, _) = send(&app, Method::POST, "/api/orders", Some(user_id), Some(zero)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_mark_notification_read() {
    let app = test_app().await;
    let referrer = sign_up(&app, 10, None).await;
    let code = referrer["referral_code"].as_str().unwrap().to_string();
    sign_up(&app, 11, Some(&code)).await;
    let referrer_id = id_of(&referrer);

    let (_, data) = send(&app, Method::GET, "/api/user", Some(referrer_id), None).await;
    let note_id = id_of(&data["notifications"][0]);
    let uri = format!("/api/notifications/{}/read", note_id);

    let (status, _) = send(&app, Method::PUT, &uri, Some(referrer_id + 1), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::PUT, &uri, Some(referrer_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (_, data) = send(&app, Method::GET, "/api/user", Some(referrer_id), None).await;
    assert_eq!(data["notifications"][0]["is_read"], true);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = test_app().await;
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/orders")
        .header(header::ORIGIN, "https://shop.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-user-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
    assert!(allowed.contains("x-user-id"));
}
