use crate::server::{
    middleware::auth::{JwtManager, Role},
    router::router,
    service::translator::PlaceholderTranslator,
    state::AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use uuid::Uuid;


const SECRET: &str = "test-secret";

/// Builds the real router over a fresh in-memory database.
///
/// The returned context owns the database and must outlive the router.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_comic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let state = AppState::new(db, JwtManager::new(SECRET), Arc::new(PlaceholderTranslator));
    let app = router().with_state(state);

    (test, app)
}

fn token(role: Role) -> String {
    JwtManager::new(SECRET)
        .generate_token(Uuid::new_v4(), role)
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, role: Option<Role>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(role) = role {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token(role)));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Sends a request and returns the status with the JSON body, or `Null` when
/// the body is empty or not JSON.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
