//! Registration orchestration on top of a [`UserStore`].

use std::sync::Arc;

use enroll_core::{random, InvalidRangeError, RegistrationInput, UserSummary, ValidationError};
use log::{info, warn};
use thiserror::Error;

use crate::store::{StoreError, UserStore};

/// Outcome of a failed registration or listing.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Input was malformed; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The address belongs to an existing user.
    #[error("email already registered: {0}")]
    EmailAlreadyRegistered(String),
    /// The store failed; not retried. Always holds [`StoreError::Unavailable`].
    #[error(transparent)]
    StorageUnavailable(StoreError),
}

impl From<StoreError> for RegistrationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(email) => Self::EmailAlreadyRegistered(email),
            err @ StoreError::Unavailable(_) => Self::StorageUnavailable(err),
        }
    }
}

/// Validates registrations and maps store outcomes to results.
#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    max_username_len: usize,
}

impl RegistrationService {
    /// Build a service over `store`, accepting usernames up to
    /// `max_username_len` characters.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, max_username_len: usize) -> Self {
        Self {
            store,
            max_username_len,
        }
    }

    /// Register a new user and return its public summary.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::Validation`] for malformed input.
    /// - [`RegistrationError::EmailAlreadyRegistered`] if the address is taken,
    ///   whether caught by the lookup or by the store's unique index.
    /// - [`RegistrationError::StorageUnavailable`] on a database fault.
    pub async fn register(
        &self,
        input: &RegistrationInput,
    ) -> Result<UserSummary, RegistrationError> {
        let (email, record) = input.validate(self.max_username_len)?;

        if self.store.find_by_email(&email).await?.is_some() {
            warn!("registration rejected: {email} already registered");
            return Err(RegistrationError::EmailAlreadyRegistered(email.into_inner()));
        }

        let created = match self.store.create(record).await {
            Ok(created) => created,
            Err(StoreError::DuplicateEmail(addr)) => {
                warn!("registration lost insert race for {addr}");
                return Err(RegistrationError::EmailAlreadyRegistered(addr));
            }
            Err(e) => return Err(e.into()),
        };
        info!("registered user {} ({})", created.username, created.email);
        Ok(created.into())
    }

    /// Every registered user without passwords, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::StorageUnavailable`] on a database fault.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, RegistrationError> {
        let records = self.store.list_all().await?;
        Ok(records.into_iter().map(UserSummary::from).collect())
    }

    /// Number of registered users.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::StorageUnavailable`] on a database fault.
    pub async fn user_count(&self) -> Result<i64, RegistrationError> {
        Ok(self.store.count().await?)
    }

    /// Uniform integer in `[min, max]`. Unrelated to the store.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] unless `min < max`.
    pub fn random_in_range(min: i64, max: i64) -> Result<i64, InvalidRangeError> {
        random::random_in_range(min, max)
    }
}
