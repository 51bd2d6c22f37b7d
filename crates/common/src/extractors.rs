//! Custom axum extractors for the job board API

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::Error;

/// JSON extractor whose rejections render as the API's standard error body.
///
/// Malformed or mistyped bodies become `Error::Validation` (400) instead of
/// axum's plain-text rejection; bodies over the limit stay 413.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| {
                tracing::debug!(error = %e.body_text(), "Rejected JSON body");
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    Error::PayloadTooLarge("Request body too large.".to_string())
                } else {
                    Error::Validation(format!("Invalid request body: {}", e.body_text()))
                }
            })?;
        Ok(ApiJson(value))
    }
}
