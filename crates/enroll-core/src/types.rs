//! Validated newtype wrappers for the registration fields.

use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound on username length, in characters.
pub const DEFAULT_MAX_USERNAME_LEN: usize = 50;

/// Error returned when a registration field fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The field exceeds the maximum length.
    #[error("{field} exceeds maximum length of {max} characters (got {got})")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum allowed length.
        max: usize,
        /// Actual length.
        got: usize,
    },
    /// The value is not a syntactically valid e-mail address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// A syntactically valid e-mail address, kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Parse an e-mail address.
    ///
    /// Display-name forms (`Name <a@b.c>`) and domains without a dot are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for an empty string and
    /// [`ValidationError::InvalidEmail`] for anything that does not parse.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        let forbidden = |c: char| c.is_whitespace() || c == '<' || c == '>';
        if raw.chars().any(forbidden) {
            return Err(ValidationError::InvalidEmail(raw.to_owned()));
        }
        let parsed = match EmailAddress::from_str(raw) {
            Ok(parsed) => parsed,
            Err(e) => return Err(ValidationError::InvalidEmail(format!("{raw}: {e}"))),
        };
        if !parsed.domain().contains('.') {
            return Err(ValidationError::InvalidEmail(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    /// Return the address as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the owned address.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-empty display name of bounded length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a `Username`, counting length in characters rather than bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the name is empty or longer than `max_len`.
    pub fn new(raw: &str, max_len: usize) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        let got = raw.chars().count();
        if got > max_len {
            return Err(ValidationError::TooLong {
                field: "username",
                max: max_len,
                got,
            });
        }
        Ok(Self(raw.to_owned()))
    }

    /// Consume the wrapper, returning the owned name.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-empty password, stored verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a password.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] if the password is empty.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }
        Ok(Self(raw.to_owned()))
    }

    /// Return the password text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_length_counts_chars() {
        // 50 two-byte characters is 100 bytes but still within bounds.
        let name = "é".repeat(50);
        assert!(Username::new(&name, DEFAULT_MAX_USERNAME_LEN).is_ok());
    }

    #[test]
    fn password_debug_is_redacted() {
        let pw = Password::new("hunter2").unwrap();
        assert!(!format!("{pw:?}").contains("hunter2"));
    }
}
