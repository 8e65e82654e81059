//! Application error type and its mapping onto HTML responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use gazette_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and raw database errors. The
/// [`IntoResponse`] impl turns every variant into a full HTML page except
/// authentication failures, which redirect to the login form instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gazette_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading, message) = match &self {
            AppError::Core(core) => match core {
                // Page requests without a valid session go back to the
                // login form, never to an error page.
                CoreError::Unauthorized(_) => {
                    return Redirect::to("/admin/login").into_response();
                }
                CoreError::NotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    "Page not found",
                    "The page you are looking for does not exist.".to_string(),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "Invalid request", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "Forbidden", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server error",
                        "An internal error occurred.".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error",
                    "An internal error occurred.".to_string(),
                )
            }
        };

        (status, views::layout::error_page(status, heading, &message)).into_response()
    }
}

/// Classify a sqlx error into a status, heading, and user-facing message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map
///   to 409.
/// - Everything else maps to 500 with a sanitized message; the detail is
///   logged server-side only.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Page not found",
            "The page you are looking for does not exist.".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_"))
            {
                return (
                    StatusCode::CONFLICT,
                    "Conflict",
                    "A record with the same unique value already exists.".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error",
                "An internal error occurred.".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error",
                "An internal error occurred.".to_string(),
            )
        }
    }
}
