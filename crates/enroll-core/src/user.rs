//! User record, its public projection, and the registration request shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Email, Password, Username, ValidationError};

/// A persisted user entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique e-mail address, as registered.
    pub email: String,
    /// Display name; not unique.
    pub username: String,
    /// Password exactly as received.
    pub password: String,
}

impl UserRecord {
    /// Assemble a record from validated fields.
    #[must_use]
    pub fn new(email: Email, username: Username, password: &Password) -> Self {
        Self {
            email: email.into_inner(),
            username: username.into_inner(),
            password: password.expose().to_owned(),
        }
    }
}

/// Projection to the public summary; the password is dropped.
impl From<UserRecord> for UserSummary {
    fn from(record: UserRecord) -> Self {
        Self {
            email: record.email,
            username: record.username,
        }
    }
}

/// Public view of a user. Has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// E-mail address.
    pub email: String,
    /// Display name.
    pub username: String,
}

/// Request body for a registration.
#[derive(Clone, Deserialize)]
pub struct RegistrationInput {
    /// Desired display name.
    pub username: String,
    /// E-mail address to register.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl RegistrationInput {
    /// Validate every field and build the record to insert.
    ///
    /// Fields are checked in the order email, username, password; the first
    /// failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for the first field that is malformed.
    pub fn validate(
        &self,
        max_username_len: usize,
    ) -> Result<(Email, UserRecord), ValidationError> {
        let email = Email::new(&self.email)?;
        let username = Username::new(&self.username, max_username_len)?;
        let password = Password::new(&self.password)?;
        let record = UserRecord::new(email.clone(), username, &password);
        Ok((email, record))
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
