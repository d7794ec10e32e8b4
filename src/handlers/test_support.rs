use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::Config;
use crate::models::Book;
use crate::routes;
use crate::state::AppState;
use crate::store::BookStore;

/// Router over a fresh database in a temporary directory
///
/// The directory must outlive the router, so it is handed back too.
pub fn setup_test_app() -> (TempDir, AppState, Router) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("db.json");

    let config = Config {
        db_path: db_path.clone(),
        service_port: 3000,
        service_host: "0.0.0.0".to_string(),
    };
    let store = BookStore::load(&db_path).expect("Failed to load book store");
    let state = AppState::new(store, config);

    (dir, state.clone(), routes::app(state))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, Bytes) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body)
}

pub fn parse<T: DeserializeOwned>(body: &Bytes) -> T {
    serde_json::from_slice(body).unwrap()
}

pub fn text(body: &Bytes) -> &str {
    std::str::from_utf8(body).unwrap()
}

/// POST a book and return the created record
pub async fn create_book(app: &Router, body: JsonValue) -> Book {
    let (status, body) = send(app, "POST", "/books", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    parse(&body)
}
