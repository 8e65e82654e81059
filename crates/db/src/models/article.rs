//! Article entity model and write DTOs.

use gazette_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full article row from the `articles` table.
///
/// `cover_image` holds the bare stored filename (empty string when no cover
/// has been uploaded), served under `/uploads/`.
#[derive(Debug, Clone, FromRow)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new article.
#[derive(Debug, Clone, Default)]
pub struct CreateArticle {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub published: bool,
}

/// Full-row replacement for an existing article.
pub type UpdateArticle = CreateArticle;
