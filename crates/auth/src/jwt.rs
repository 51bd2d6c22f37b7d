//! JWT validation and token extraction helpers

use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum_extra::extract::CookieJar;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Validate a session token
pub(crate) fn validate_jwt_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp"]);

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Sign a session token
pub(crate) fn encode_jwt_token(
    claims: &SessionClaims,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&header, claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "JWT encoding failed");
        AuthError::TokenEncoding
    })
}

/// Extract the session token from the request.
///
/// Checks the `Authorization: Bearer` header first, then the session cookie.
pub(crate) fn extract_session_token(
    headers: &HeaderMap,
    cookie_name: &str,
) -> Result<String, AuthError> {
    if let Some(header) = headers.get(AUTHORIZATION) {
        let header_str = header
            .to_str()
            .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

        return match header_str.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(AuthError::InvalidAuthorizationFormat),
        };
    }

    let jar = CookieJar::from_headers(headers);
    jar.get(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingToken)
}
