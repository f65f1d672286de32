//! Axum router construction.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::index::{health_handler, index_handler};
use crate::handlers::random::random_handler;
use crate::handlers::users::{list_users_handler, register_handler};
use crate::service::RegistrationService;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Registration front door over the user store.
    pub service: RegistrationService,
}

/// Handle to [`AppState`] passed to handlers.
pub type SharedState = Arc<AppState>;

/// Build the Axum application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .route("/register", post(register_handler))
        .route("/users", get(list_users_handler))
        .route("/random", post(random_handler))
        .with_state(Arc::new(state))
}
