//! Database connection pool initialisation.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Errors that can occur during database initialisation.
#[derive(Debug, Error)]
pub enum DbError {
    /// SQLx returned an error connecting or migrating.
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    /// Migration error.
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Open (creating if absent) the `SQLite` database and apply the schema.
///
/// # Errors
///
/// Returns [`DbError`] if the URL is malformed, the file cannot be opened,
/// or the schema script fails.
pub async fn connect_and_migrate(
    database_url: &str,
    busy_timeout: Duration,
) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(busy_timeout);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}
