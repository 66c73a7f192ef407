//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store-facing failures echo the raw backend message to the caller (a
//! debugging convenience this service commits to); unexpected internal
//! failures are suppressed unless development mode is on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400); never reached the store
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Uniqueness violation (409)
    Conflict { message: &'static str },

    /// Store failure (500); `context` becomes the `error` label,
    /// the raw store message goes in `message`
    Store {
        context: &'static str,
        source: DbError,
    },

    /// Unexpected failure (500); message shown only in dev mode
    Internal { message: String, expose: bool },
}

impl ApiError {
    /// Map a store error into the taxonomy, exhaustively.
    pub fn from_db(context: &'static str, e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            DbError::Conflict { .. } => Self::Conflict {
                message: "Email already exists",
            },
            DbError::Sqlx(_) => Self::Store { context, source: e },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Not found",
                    "message": format!("{} not found", capitalize(resource))
                }),
            ),
            Self::Conflict { message } => (
                StatusCode::CONFLICT,
                json!({
                    "error": "Conflict",
                    "message": message
                }),
            ),
            Self::Store { context, source } => {
                tracing::error!("{}: {}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": context,
                        "message": source.to_string()
                    }),
                )
            }
            Self::Internal { message, expose } => {
                tracing::error!("Internal error: {}", message);
                let shown = if *expose {
                    message.clone()
                } else {
                    "Something went wrong".to_string()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Internal server error",
                        "message": shown
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Build the response for a handler panic.
///
/// The panic message is surfaced only when development mode is on;
/// otherwise callers get the generic internal-error body.
pub fn panic_response(dev_mode: bool, err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal {
        message,
        expose: dev_mode,
    }
    .into_response()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
