//! Session authentication for the job board API
//!
//! Provides JWT validation and an axum extractor that resolves the acting
//! identity for any domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use backend::{AuthBackend, SESSION_TTL_SECS};
pub use claims::SessionClaims;
pub use config::{AuthConfig, DEFAULT_COOKIE_NAME};
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
