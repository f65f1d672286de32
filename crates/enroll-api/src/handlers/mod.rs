//! HTTP request handlers.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;

use crate::models::ErrorResponse;
use crate::service::RegistrationError;

pub mod index;
pub mod random;
pub mod users;

/// Build a JSON error response with a `detail` message.
pub fn api_error(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// Map a service failure to its HTTP response.
///
/// Storage faults are logged here and reported without internal detail.
pub fn registration_error(err: &RegistrationError) -> Response {
    match err {
        RegistrationError::Validation(e) => {
            api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        RegistrationError::EmailAlreadyRegistered(_) => {
            api_error(StatusCode::BAD_REQUEST, "Email already registered")
        }
        RegistrationError::StorageUnavailable(e) => {
            error!("db: {e}");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "storage unavailable")
        }
    }
}

/// Re-wrap an axum JSON body rejection in the `detail` error shape,
/// keeping its status.
pub fn json_rejection(rejection: &JsonRejection) -> Response {
    api_error(rejection.status(), rejection.body_text())
}

#[cfg(test)]
mod tests {
    use enroll_core::ValidationError;

    use super::*;
    use crate::store::StoreError;

    #[test]
    fn duplicate_maps_to_bad_request() {
        let resp = registration_error(&RegistrationError::EmailAlreadyRegistered(
            "a@example.com".to_owned(),
        ));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_maps_to_unprocessable() {
        let resp = registration_error(&RegistrationError::Validation(ValidationError::Empty {
            field: "username",
        }));
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn storage_fault_maps_to_500() {
        let resp = registration_error(&RegistrationError::StorageUnavailable(
            StoreError::Unavailable(sqlx::Error::PoolTimedOut),
        ));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
