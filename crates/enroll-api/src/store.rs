//! Durable, unique-by-email user collection.
//!
//! The unique index on `users.email` is the only thing that decides whether
//! an insert is a duplicate. Callers may look an address up first, but a
//! concurrent writer can still win between the lookup and the insert; that
//! case surfaces here as [`StoreError::DuplicateEmail`].

use async_trait::async_trait;
use enroll_core::{Email, UserRecord};
use log::debug;
use sqlx::SqlitePool;
use thiserror::Error;

/// Failures returned by a [`UserStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another record already holds this address.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    /// The backing database could not complete the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Persistent collection of [`UserRecord`]s keyed by e-mail.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look a record up by address. `Ok(None)` when absent.
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StoreError>;

    /// Insert a new record, failing with [`StoreError::DuplicateEmail`] if the
    /// address is taken.
    async fn create(&self, record: UserRecord) -> Result<UserRecord, StoreError>;

    /// Every record, oldest first.
    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Number of stored records.
    async fn count(&self) -> Result<i64, StoreError>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    username: String,
    password: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        Self {
            email: row.email,
            username: row.username,
            password: row.password,
        }
    }
}

/// [`UserStore`] over a `SQLite` pool prepared by
/// [`connect_and_migrate`](crate::db::connect_and_migrate).
///
/// Addresses compare ASCII-case-insensitively (`COLLATE NOCASE`).
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Wrap an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Borrow the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<UserRecord>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT email, username, password FROM users WHERE email = ?1 COLLATE NOCASE",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(UserRecord::from))
    }

    async fn create(&self, record: UserRecord) -> Result<UserRecord, StoreError> {
        let inserted =
            sqlx::query("INSERT INTO users (email, username, password) VALUES (?1, ?2, ?3)")
                .bind(&record.email)
                .bind(&record.username)
                .bind(&record.password)
                .execute(&self.pool)
                .await;

        match inserted {
            Ok(_) => {
                debug!("inserted user {}", record.email);
                Ok(record)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateEmail(record.email))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let rows =
            sqlx::query_as::<_, UserRow>("SELECT email, username, password FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
