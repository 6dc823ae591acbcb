//! Request extractors that fail with [`AppError`] instead of axum's plain rejections.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use super::dto::WireFields;
use crate::error::AppError;

/// Like [`axum::Json`], but rejects malformed bodies and failed
/// [`Validate`] checks with [`AppError::Validation`]. Field errors are keyed
/// by their [`WireFields`] names.
///
/// ```rust,ignore
/// async fn create(ValidatedJson(model): ValidatedJson<CampModel>) { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + WireFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(error = %rejection, "Rejected request body");
                AppError::validation(
                    "One or more validation errors occurred.",
                    json!({ "body": [rejection.body_text()] }),
                )
            })?;

        value
            .validate()
            .map_err(|errors| AppError::from_validation(errors, T::wire_name))?;

        Ok(ValidatedJson(value))
    }
}

/// `{moniker}/talks/{id}` path segments.
///
/// An id that is not an integer does not address any talk, so it is
/// answered with an empty 404 rather than a 400.
#[derive(Debug, Clone)]
pub struct TalkPath {
    pub moniker: String,
    pub talk_id: i64,
}

impl<S> FromRequestParts<S> for TalkPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((moniker, raw_id)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "Unmatched talk path");
                AppError::not_found_silent()
            })?;

        let talk_id = raw_id.parse::<i64>().map_err(|_| {
            tracing::debug!(id = %raw_id, "Talk id is not an integer");
            AppError::not_found_silent()
        })?;

        Ok(TalkPath { moniker, talk_id })
    }
}
