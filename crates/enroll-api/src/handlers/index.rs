//! GET / and GET /healthz.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use log::error;
use serde_json::json;

use crate::models::{EndpointDoc, HealthResponse, IndexResponse};
use crate::router::SharedState;

fn endpoint(
    path: &str,
    method: &str,
    description: &str,
    parameters: Option<serde_json::Value>,
) -> EndpointDoc {
    EndpointDoc {
        path: path.to_owned(),
        method: method.to_owned(),
        description: description.to_owned(),
        parameters,
    }
}

/// Handle `GET /` — welcome message and endpoint listing.
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Welcome to the enroll server!".to_owned(),
        endpoints: vec![
            endpoint("/", "GET", "Get server status", None),
            endpoint(
                "/register",
                "POST",
                "Register a new user",
                Some(json!({"username": "string", "email": "string", "password": "string"})),
            ),
            endpoint("/users", "GET", "Get all registered users", None),
            endpoint(
                "/random",
                "POST",
                "Generate a random number",
                Some(json!({"min": "int", "max": "int"})),
            ),
        ],
    })
}

/// Handle `GET /healthz` — `200` with the user count, `503` if the store is down.
pub async fn health_handler(
    State(state): State<SharedState>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.service.user_count().await {
        Ok(n) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_owned(),
                users: Some(n),
            }),
        ),
        Err(e) => {
            error!("health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_owned(),
                    users: None,
                }),
            )
        }
    }
}
