use std::sync::Arc;
use std::time::Duration;

use enroll_api::db::connect_and_migrate;
use enroll_api::router::AppState;
use enroll_api::service::RegistrationService;
use enroll_api::store::SqliteUserStore;
use enroll_core::{RegistrationInput, DEFAULT_MAX_USERNAME_LEN};
use tempfile::TempDir;

/// Fresh database file in a temp dir. Keep the `TempDir` alive for the test.
pub async fn temp_store() -> (TempDir, SqliteUserStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("enroll.db").display());
    let pool = connect_and_migrate(&url, Duration::from_secs(5))
        .await
        .expect("open database");
    (dir, SqliteUserStore::new(pool))
}

#[allow(dead_code)]
pub async fn temp_service() -> (TempDir, RegistrationService) {
    let (dir, store) = temp_store().await;
    (dir, RegistrationService::new(Arc::new(store), DEFAULT_MAX_USERNAME_LEN))
}

#[allow(dead_code)]
pub async fn temp_state() -> (TempDir, AppState) {
    let (dir, service) = temp_service().await;
    (dir, AppState { service })
}

#[allow(dead_code)]
pub fn input(username: &str, email: &str, password: &str) -> RegistrationInput {
    RegistrationInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}
