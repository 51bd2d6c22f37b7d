//! Authentication configuration

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Name of the cookie carrying the session token
    pub cookie_name: String,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("cookie_name", &self.cookie_name)
            .finish()
    }
}

/// Session cookie set by the login flow
pub const DEFAULT_COOKIE_NAME: &str = "token";
