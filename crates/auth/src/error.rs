//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidUserId,
    TokenEncoding,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "User not authenticated"),
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            AuthError::InvalidUserId => (StatusCode::UNAUTHORIZED, "Invalid user ID in token"),
            AuthError::TokenEncoding => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to issue session token",
            ),
        };

        let body = Json(json!({
            "message": message,
            "success": false,
        }));

        (status, body).into_response()
    }
}
