mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use enroll_api::models::{HealthResponse, IndexResponse};
use enroll_api::router::{build_router, AppState};
use enroll_api::service::RegistrationService;

#[tokio::test]
async fn health_returns_200() {
    let (_dir, state) = common::temp_state().await;
    let server = TestServer::new(build_router(state)).unwrap();
    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.users, Some(0));
}

#[tokio::test]
async fn health_returns_503_when_store_closed() {
    let (_dir, store) = common::temp_store().await;
    store.pool().close().await;
    let state = AppState {
        service: RegistrationService::new(Arc::new(store), 50),
    };
    let server = TestServer::new(build_router(state)).unwrap();
    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn index_lists_endpoints() {
    let (_dir, state) = common::temp_state().await;
    let server = TestServer::new(build_router(state)).unwrap();
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: IndexResponse = response.json();
    let paths: Vec<&str> = body.endpoints.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["/", "/register", "/users", "/random"]);
}
