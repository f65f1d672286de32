//! POST /random — random integer in a caller-given range.

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use axum::Json;
use enroll_core::{RandomRequest, RandomResult};

use super::api_error;
use crate::models::RandomQuery;
use crate::service::RegistrationService;

/// Pick the bounds from a JSON body if one was sent, else from the query string.
///
/// The query string is not parsed at all when a body is present.
///
/// # Errors
///
/// Returns a `422` response if the chosen source is malformed or does not
/// supply both bounds.
pub fn resolve_bounds(uri: &Uri, body: &[u8]) -> Result<RandomRequest, Response> {
    if body.iter().any(|b| !b.is_ascii_whitespace()) {
        return serde_json::from_slice::<RandomRequest>(body)
            .map_err(|e| unprocessable(format!("invalid body: {e}")));
    }
    let Query(query) = Query::<RandomQuery>::try_from_uri(uri)
        .map_err(|e| unprocessable(format!("invalid query: {}", e.body_text())))?;
    match (query.min, query.max) {
        (Some(min), Some(max)) => Ok(RandomRequest { min, max }),
        _ => Err(unprocessable("min and max are required")),
    }
}

fn unprocessable(detail: impl Into<String>) -> Response {
    api_error(StatusCode::UNPROCESSABLE_ENTITY, detail)
}

/// Handle `POST /random`.
///
/// # Errors
///
/// Returns `422` if the bounds are missing or malformed and `400` if
/// `min >= max`.
pub async fn random_handler(uri: Uri, body: Bytes) -> Result<Json<RandomResult>, Response> {
    let req = resolve_bounds(&uri, &body)?;
    let random_number = RegistrationService::random_in_range(req.min, req.max)
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "min must be less than max"))?;
    Ok(Json(RandomResult { random_number }))
}
