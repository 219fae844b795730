// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Global Application Error Enum.
/// Every service and handler returns this; each variant maps to one HTTP status.
#[derive(Debug, Error)]
pub enum AppError {
    // 400 Bad Request
    #[error("A trivia session is already active")]
    ActiveSessionExists,

    // 400 Bad Request
    #[error("No active trivia session")]
    NoActiveSession,

    // 400 Bad Request
    #[error("You have already answered this question")]
    DuplicateAnswer,

    // 403 Forbidden
    #[error("Admin access required")]
    InvalidApiKey,

    // 400 Bad Request
    #[error("Validation error: {0}")]
    Validation(String),

    // 500 Internal Server Error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ActiveSessionExists
            | AppError::NoActiveSession
            | AppError::DuplicateAnswer
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidApiKey => StatusCode::FORBIDDEN,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts the error into a `{"status": "error", "message": ...}` body.
/// Store failures are logged and hidden behind a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Database(_) => {
                tracing::error!("Internal Server Error: {}", self);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let msg = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    format!("{}: {}", field, msg)
                })
            })
            .collect();
        // field_errors() is a HashMap; keep the message stable.
        fields.sort();
        AppError::Validation(fields.join(", "))
    }
}

/// True when the error is a unique-constraint violation raised by the store.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
