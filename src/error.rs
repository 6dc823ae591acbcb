//! Application error type and its HTTP rendering.
//!
//! Every request path returns `Result<_, AppError>`. The variants form a closed
//! set that maps one-to-one onto the statuses the API is allowed to return:
//!
//! | variant        | status | body                                   |
//! |----------------|--------|----------------------------------------|
//! | `Validation`   | 400    | envelope with per-field messages       |
//! | `Rejected`     | 400    | envelope with the business-rule message |
//! | `NotFound`     | 404    | envelope, or empty when no message     |
//! | `NotSaved`     | 400    | envelope, or empty when no message     |
//! | `Internal`     | 500    | envelope with a generic message        |

use std::borrow::Cow;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload nested under `error` in every error body.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed structural validation.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// A business rule refused the request (duplicate moniker, missing speaker).
    #[error("{message}")]
    Rejected { message: String },
    /// The addressed resource does not exist.
    #[error("{}", .message.as_deref().unwrap_or("Not found"))]
    NotFound { message: Option<String> },
    /// The store accepted the call but reported that nothing was persisted.
    #[error("{}", .message.as_deref().unwrap_or("Nothing was saved"))]
    NotSaved { message: Option<String> },
    /// Unexpected data-access fault.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: Some(message.into()),
        }
    }

    /// 404 with an empty body.
    pub fn not_found_silent() -> Self {
        Self::NotFound { message: None }
    }

    pub fn not_saved(message: Option<&str>) -> Self {
        Self::NotSaved {
            message: message.map(str::to_string),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Replaces the message of an internal fault with the resource's public
    /// failure text and drops its details. Other variants pass through.
    pub fn masked(self, message: &'static str) -> Self {
        match self {
            AppError::Internal { .. } => AppError::Internal {
                message: message.to_string(),
                details: json!({}),
            },
            other => other,
        }
    }

    /// Returns the HTTP status this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Rejected { .. } | AppError::NotSaved { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts into the error payload, or `None` for body-less errors.
    pub fn to_error_info(&self) -> Option<ErrorInfo> {
        match self {
            AppError::Validation { message, details } => Some(ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            }),
            AppError::Rejected { message } => Some(ErrorInfo {
                code: "bad_request",
                message: message.clone(),
                details: json!({}),
            }),
            AppError::NotFound { message } => message.as_ref().map(|message| ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: json!({}),
            }),
            AppError::NotSaved { message } => message.as_ref().map(|message| ErrorInfo {
                code: "not_saved",
                message: message.clone(),
                details: json!({}),
            }),
            AppError::Internal { message, details } => Some(ErrorInfo {
                code: "internal_error",
                message: message.clone(),
                details: details.clone(),
            }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self.to_error_info() {
            Some(error) => (status, Json(ErrorBody { error })).into_response(),
            None => status.into_response(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl AppError {
    /// Collects per-field messages from a failed [`validator::Validate`] run,
    /// keyed by `wire_name(field)` so clients see the JSON property names.
    pub fn from_validation(errors: ValidationErrors, wire_name: impl Fn(&str) -> String) -> Self {
        let mut fields = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let key = wire_name(&*field);
            let messages: Vec<Value> = field_errors
                .iter()
                .map(|e| {
                    let message = e
                        .message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(format!("The {key} field is invalid.")));
                    Value::String(message.into_owned())
                })
                .collect();
            fields.insert(key, Value::Array(messages));
        }

        AppError::validation(
            "One or more validation errors occurred.",
            Value::Object(fields),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, Vec<u8>) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_not_found_without_message_has_empty_body() {
        let (status, body) = body_of(AppError::not_found_silent()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_renders_envelope() {
        let (status, body) = body_of(AppError::rejected("Moniker already exists!")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "bad_request");
        assert_eq!(json["error"]["message"], "Moniker already exists!");
    }

    #[tokio::test]
    async fn test_not_saved_with_message() {
        let (status, body) = body_of(AppError::not_saved(Some("Failed to delete camp"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "Failed to delete camp");
    }

    #[tokio::test]
    async fn test_not_saved_without_message_has_empty_body() {
        let (status, body) = body_of(AppError::not_saved(None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }

    #[test]
    fn test_display_falls_back_when_message_is_absent() {
        assert_eq!(AppError::not_found("Talk Not Found!").to_string(), "Talk Not Found!");
        assert_eq!(AppError::not_found_silent().to_string(), "Not found");
        assert_eq!(AppError::not_saved(None).to_string(), "Nothing was saved");
        assert_eq!(
            AppError::rejected("Moniker already exists!").to_string(),
            "Moniker already exists!"
        );
    }

    #[tokio::test]
    async fn test_validation_details_use_wire_names() {
        use validator::ValidationError;

        let mut errors = ValidationErrors::new();
        errors.add("abstract_text", ValidationError::new("length"));
        errors.add(
            "event_date",
            ValidationError::new("required").with_message("The EventDate field is required.".into()),
        );

        let error = AppError::from_validation(errors, |field| match field {
            "abstract_text" => "abstract".to_string(),
            "event_date" => "eventDate".to_string(),
            other => other.to_string(),
        });
        let (status, body) = body_of(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        let details = &json["error"]["details"];
        assert_eq!(details["abstract"][0], "The abstract field is invalid.");
        assert_eq!(details["eventDate"][0], "The EventDate field is required.");
        assert!(details.get("abstract_text").is_none());
    }

    #[test]
    fn test_masked_rewrites_only_internal() {
        let masked = AppError::internal("Database error", json!({"table": "camps"}))
            .masked("Database Failure!");
        match masked {
            AppError::Internal { message, details } => {
                assert_eq!(message, "Database Failure!");
                assert_eq!(details, json!({}));
            }
            other => panic!("unexpected variant: {other:?}"),
        }

        let untouched = AppError::not_found("Talk Not Found!").masked("Failed to get Talks!");
        assert!(matches!(untouched, AppError::NotFound { message: Some(m) } if m == "Talk Not Found!"));
    }
}
