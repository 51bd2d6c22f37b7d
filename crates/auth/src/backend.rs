//! Concrete authentication backend
//!
//! Resolves the acting identity from a signed session token. Token issuing
//! lives here too so login flows and tests sign with the same key.

use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Default session lifetime (one day)
pub const SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Validate a session token and resolve the acting identity.
    pub fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| AuthError::InvalidUserId)?;

        Ok(AuthContext::new(user_id))
    }

    /// Sign a session token for a user, valid for `ttl_secs`.
    pub fn issue_token(&self, user_id: Uuid, ttl_secs: u64) -> Result<String, AuthError> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        let claims = SessionClaims {
            user_id: user_id.to_string(),
            iat: now,
            exp: now + ttl_secs,
        };

        crate::jwt::encode_jwt_token(&claims, &self.config)
    }
}
