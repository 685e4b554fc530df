//! Common helpers for HTTP-level tests.
#![allow(dead_code, clippy::unwrap_used)]

use apex_planner::{
    api::{self, AppState},
    config::{PlanningConfig, database},
    entities::{product, store},
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory database, plus the database handle for seeding.
pub async fn setup_test_app() -> (Router, DatabaseConnection) {
    let db = database::create_connection("sqlite::memory:").await.unwrap();
    database::create_tables(&db).await.unwrap();
    let app = api::router(AppState::new(db.clone(), PlanningConfig::default()));
    (app, db)
}

pub async fn seed_store(db: &DatabaseConnection, store_id: &str, store_name: &str) {
    store::ActiveModel {
        store_id: Set(store_id.to_string()),
        store_name: Set(store_name.to_string()),
        region: Set(Some("Lima".to_string())),
        cluster: Set(Some("A".to_string())),
        store_type: Set(Some("mall".to_string())),
        capacity: Set(Some(5000)),
        opening_date: Set(None),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_product(db: &DatabaseConnection, sku_id: &str, style_id: &str, dept_id: i32) {
    product::ActiveModel {
        sku_id: Set(sku_id.to_string()),
        style_id: Set(style_id.to_string()),
        vendor: Set(Some("Andes Footwear".to_string())),
        dept_id: Set(dept_id),
        gender: Set(Some("W".to_string())),
        color: Set(Some("BLK".to_string())),
        size: Set(Some("38".to_string())),
        initial_cost: Set(40.0),
        retail_price: Set(99.9),
        buy_qty_suggested_total: Set(120),
        is_core: Set(true),
    }
    .insert(db)
    .await
    .unwrap();
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string(), Some("application/json")).await
}

/// Posts `body` verbatim, with the given `Content-Type` if any.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    body: &str,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}
