//! Router-level tests that exercise the full HTTP contract against the
//! document store, without binding a socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use store::DocumentStore;
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = DocumentStore::open(dir.path().join("db.json")).await.unwrap();
    (web_server::router(Arc::new(store)), dir)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn health_check_names_the_service() {
    let (app, _dir) = test_app().await;
    let (status, body) = send_empty(&app, "GET", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "service": "sword-game-backend" }));
}

#[tokio::test]
async fn trades_can_be_created_listed_and_deleted() {
    let (app, _dir) = test_app().await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/leverage-trades",
        json!({
            "company": "ACME",
            "leverage": 10,
            "type": "inverse",
            "quantity": 3,
            "user": "u1"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let trade = &created["trade"];
    assert_eq!(trade["company"], "ACME");
    assert_eq!(trade["type"], "inverse");
    assert!(trade["id"].is_string());
    assert!(trade["createdAt"].is_i64());

    let (status, listed) = send_empty(&app, "GET", "/api/leverage-trades").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["trades"], json!([trade.clone()]));

    let id = trade["id"].as_str().unwrap();
    let (status, body) =
        send_empty(&app, "DELETE", &format!("/api/leverage-trades/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, listed) = send_empty(&app, "GET", "/api/leverage-trades").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["trades"], json!([]));
}

#[tokio::test]
async fn deleting_a_missing_trade_is_a_404_with_detail() {
    let (app, _dir) = test_app().await;
    let (status, body) = send_empty(
        &app,
        "DELETE",
        "/api/leverage-trades/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Trade not found" }));
}

#[tokio::test]
async fn sync_then_rankings_reflect_effective_assets() {
    let (app, _dir) = test_app().await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/game/sync",
        json!({ "userId": "u1", "clubName": "A", "totalAssets": 100 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    send_json(
        &app,
        "POST",
        "/api/game/sync",
        json!({ "userId": "u2", "clubName": "A", "totalAssets": 50 }),
    )
    .await;
    // No club and no totalAssets: ranks under NoClub with maxStage.
    send_json(
        &app,
        "POST",
        "/api/game/sync",
        json!({ "userId": "u3", "maxStage": 10 }),
    )
    .await;

    let (status, body) = send_empty(&app, "GET", "/api/rankings/clubs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["rankings"],
        json!([
            { "clubName": "A", "totalAssets": 150 },
            { "clubName": "NoClub", "totalAssets": 10 }
        ])
    );

    let (status, body) = send_empty(&app, "GET", "/api/rankings/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["rankings"],
        json!([
            { "username": "u1", "totalAssets": 100 },
            { "username": "u2", "totalAssets": 50 },
            { "username": "u3", "totalAssets": 10 }
        ])
    );
}

#[tokio::test]
async fn repeated_sync_overwrites_the_same_user() {
    let (app, _dir) = test_app().await;

    send_json(
        &app,
        "POST",
        "/api/game/sync",
        json!({ "userId": "u1", "maxStage": 5 }),
    )
    .await;
    send_json(
        &app,
        "POST",
        "/api/game/sync",
        json!({ "userId": "u1", "maxStage": 5, "totalAssets": 99 }),
    )
    .await;

    let (_, body) = send_empty(&app, "GET", "/api/rankings/users").await;
    assert_eq!(
        body["rankings"],
        json!([{ "username": "u1", "totalAssets": 99 }])
    );
}
