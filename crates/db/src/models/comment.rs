//! Comment entity model and write DTO.

use gazette_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full comment row from the `comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub article_id: DbId,
    pub author_name: String,
    pub content: String,
    pub approved: bool,
    pub created_at: Timestamp,
}

/// Fields for inserting a new comment. Public submissions always insert with
/// `approved = false`; visibility is granted by the moderation action.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub article_id: DbId,
    pub author_name: String,
    pub content: String,
}
