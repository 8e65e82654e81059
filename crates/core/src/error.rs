//! Domain error taxonomy shared across the workspace.

/// Domain-level errors classified by how the HTTP layer must answer them.
///
/// Repositories return raw `sqlx::Error`; handlers and domain helpers
/// translate into one of these variants, which the API error type maps to a
/// response (404 page, login redirect, 403 page, and so on).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by id, slug, or nickname matched no row.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] with any displayable key.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
