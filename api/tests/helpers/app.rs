use std::convert::Infallible;

use api::routes::routes;
use api::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use common::config::Config;
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use tower::util::BoxCloneService;

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

/// Builds the full router against a fresh in-memory database. Tests drive it
/// with `tower::ServiceExt::oneshot` and get the connection back for direct
/// seeding and assertions.
pub async fn make_test_app() -> (TestApp, DatabaseConnection) {
    Config::init(".env");

    let db = setup_test_db().await;
    let app_state = AppState::new(db.clone());

    let router = Router::new().nest("/api", routes(app_state));

    (router.into_service().boxed_clone(), db)
}

/// Fires one request and decodes the JSON envelope. `body: None` sends an
/// empty body without a content type.
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
