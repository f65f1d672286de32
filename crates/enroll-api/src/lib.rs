//! enroll registration API library.
#![deny(warnings, clippy::all, clippy::pedantic)]
#![warn(missing_docs)]

pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod router;
pub mod service;
pub mod store;
