//! Shared utilities, configuration, and error handling for the job board API
//!
//! This crate provides common functionality used across the application:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP rendering
//! - Request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, PersistenceProvider};
pub use db::{classify_write_error, RepositoryError};
pub use error::{Error, Result};
pub use extractors::ApiJson;
