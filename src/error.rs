//! HTTP error type and its JSON envelope.
//!
//! Every error response (other than the empty 404 of the get-by-id endpoint)
//! has the shape:
//!
//! ```json
//! { "error": { "code": "conflict", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::error::FavoriteSourceError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload rendered inside the `error` envelope.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl From<FavoriteSourceError> for AppError {
    fn from(e: FavoriteSourceError) -> Self {
        match e {
            FavoriteSourceError::NotFound { id } => {
                AppError::not_found("Favorite source not found", json!({ "id": id }))
            }
            FavoriteSourceError::Duplicate { value } => AppError::conflict(
                "Favorite source already exists",
                json!({ "source": value }),
            ),
            FavoriteSourceError::InvalidInput(reason) => {
                AppError::bad_request("Invalid favorite source", json!({ "reason": reason }))
            }
            FavoriteSourceError::Storage(reason) => {
                tracing::error!("Storage failure: {}", reason);
                AppError::internal("Internal server error", json!({}))
            }
        }
    }
}
