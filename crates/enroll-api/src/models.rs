//! API response and query models that are not part of the domain.

use serde::{Deserialize, Serialize};

/// JSON body for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub detail: String,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `unavailable`.
    pub status: String,
    /// Registered users, when the store answered.
    pub users: Option<i64>,
}

/// One entry of the endpoint listing served at `/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointDoc {
    /// Route path.
    pub path: String,
    /// HTTP method.
    pub method: String,
    /// What the endpoint does.
    pub description: String,
    /// Parameter names mapped to their types, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

/// Response body for `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    /// Greeting.
    pub message: String,
    /// Available endpoints.
    pub endpoints: Vec<EndpointDoc>,
}

/// Query parameters accepted by `POST /random` when no JSON body is sent.
#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    /// Inclusive lower bound.
    pub min: Option<i64>,
    /// Inclusive upper bound.
    pub max: Option<i64>,
}
