use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::flash::{self, FlashLevel};

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// Malformed input: empty title, no questions, missing options.
    Validation(String),
    /// Operation attempted on the wrong survey kind, e.g. submitting to a
    /// template. Never a hard failure.
    WrongKind(String),
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation: {msg}"),
            AppError::WrongKind(msg) => write!(f, "Wrong Kind: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            // Handlers usually pick a closer destination for these two;
            // the list entry point is the fallback.
            AppError::Validation(msg) => flash::redirect("/", FlashLevel::Danger, &msg),
            AppError::WrongKind(msg) => flash::redirect("/", FlashLevel::Warning, &msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
