//! Core domain types for the enroll registration service.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod random;
pub mod types;
pub mod user;

pub use random::{random_in_range, InvalidRangeError, RandomRequest, RandomResult};
pub use types::{Email, Password, Username, ValidationError, DEFAULT_MAX_USERNAME_LEN};
pub use user::{RegistrationInput, UserRecord, UserSummary};
