//! End-to-end API tests driving the router in-process
//!
//! Builds the full axum app with a mock upstream fetcher and a temp work
//! dir, then feeds it raw HTTP requests.

use async_trait::async_trait;
use axum::body::Body;
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::Service;

use menu_server::core::build_app;
use menu_server::menu::{FetchError, MenuFetcher, MenuService, SourceMenuItem};
use menu_server::{Config, OrderStore, ServerState, SnapshotStore};
use shared::models::{Category, Order};

/// Upstream stand-in: every category returns one item, except slugs
/// containing "down" which fail.
struct StubFetcher;

#[async_trait]
impl MenuFetcher for StubFetcher {
    async fn fetch(&self, slug: &str) -> Result<Vec<SourceMenuItem>, FetchError> {
        if slug.contains("down") {
            return Err(FetchError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(vec![SourceMenuItem {
            id: format!("{slug}-1"),
            name: format!("{slug} plate"),
            dsc: "tasty".into(),
            price: 5.0,
            img: String::new(),
        }])
    }
}

async fn test_state(dir: &tempfile::TempDir, categories: &[&str]) -> ServerState {
    let mut config = Config::with_overrides(dir.path().to_str().unwrap(), 0);
    config.menu_categories = categories.iter().map(|s| s.to_string()).collect();

    let menu = MenuService::new(Arc::new(StubFetcher), config.menu_categories.clone());
    let orders = OrderStore::load(SnapshotStore::new(config.snapshot_path())).await;

    ServerState::new(config, menu, orders)
}

async fn send(
    state: &ServerState,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (http::StatusCode, serde_json::Value) {
    let mut app = build_app().with_state(state.clone());

    let mut builder = http::Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder.body(Body::from(json.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

const VALID_ORDER: &str = r#"{
    "id": 42,
    "date": "2001-01-01T00:00:00.000",
    "total": 10.0,
    "items": [{"id": "bbqs-1", "name": "bbqs plate", "price": 5.0, "quantity": 2, "imageUrl": ""}],
    "customer": {"name": "Ana", "email": "ana@example.com", "phoneNumber": "555-0101"}
}"#;

#[tokio::test]
async fn menu_returns_all_healthy_categories_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir, &["bbqs", "breads-down", "fried-chicken"]).await;

    let (status, body) = send(&state, "GET", "/api/menu", None).await;

    assert_eq!(status, http::StatusCode::OK);
    let catalog: Vec<Category> = serde_json::from_value(body).unwrap();
    let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
    // "breads-down" failed upstream and is omitted
    assert_eq!(names, vec!["Bbqs", "Fried Chicken"]);
    assert_eq!(catalog[1].items[0].description, "tasty");
}

#[tokio::test]
async fn place_order_overwrites_id_and_date() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir, &["bbqs"]).await;

    let (status, body) = send(&state, "POST", "/api/orders", Some(VALID_ORDER)).await;

    assert_eq!(status, http::StatusCode::OK);
    let order: Order = serde_json::from_value(body).unwrap();
    assert_ne!(order.id, 42);
    assert_ne!(order.date, "2001-01-01T00:00:00.000");
    assert_eq!(order.total, 10.0);
    assert_eq!(order.customer.name, "Ana");

    // The created order is now the front of the history
    let (_, body) = send(&state, "GET", "/api/orders", None).await;
    let history: Vec<Order> = serde_json::from_value(body).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0], order);
}

#[tokio::test]
async fn empty_order_is_rejected_with_400() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir, &["bbqs"]).await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/orders",
        Some(r#"{"total": 0.0, "items": [], "customer": {}}"#),
    )
    .await;

    assert_eq!(status, http::StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["message"], "Order must contain at least one item.");

    let (_, body) = send(&state, "GET", "/api/orders", None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let state = test_state(&dir, &["bbqs"]).await;
    send(&state, "POST", "/api/orders", Some(VALID_ORDER)).await;
    send(&state, "POST", "/api/orders", Some(VALID_ORDER)).await;
    let (_, before) = send(&state, "GET", "/api/orders", None).await;

    // New state over the same work dir simulates a process restart
    let restarted = test_state(&dir, &["bbqs"]).await;
    let (_, after) = send(&restarted, "GET", "/api/orders", None).await;

    assert_eq!(before, after);
    assert_eq!(after.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(&dir, &[]).await;

    let (status, body) = send(&state, "GET", "/health", None).await;

    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
