//! POST /register and GET /users.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use enroll_core::{RegistrationInput, UserSummary};

use super::{json_rejection, registration_error};
use crate::router::SharedState;

/// Handle `POST /register` — create a user and return its summary.
///
/// # Errors
///
/// Returns `422` for malformed input, `400` if the email is already
/// registered, or `500` on a database error. A body that is not a JSON
/// registration keeps axum's rejection status (`400`, `415` or `422`).
pub async fn register_handler(
    State(state): State<SharedState>,
    payload: Result<Json<RegistrationInput>, JsonRejection>,
) -> Result<Json<UserSummary>, Response> {
    let Json(body) = payload.map_err(|e| json_rejection(&e))?;
    state
        .service
        .register(&body)
        .await
        .map(Json)
        .map_err(|e| registration_error(&e))
}

/// Handle `GET /users` — list every registered user, oldest first.
///
/// # Errors
///
/// Returns `500` on a database error.
pub async fn list_users_handler(
    State(state): State<SharedState>,
) -> Result<Json<Vec<UserSummary>>, Response> {
    state
        .service
        .list_users()
        .await
        .map(Json)
        .map_err(|e| registration_error(&e))
}
