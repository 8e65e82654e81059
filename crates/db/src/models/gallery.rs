//! Gallery and image entity models and write DTOs.

use gazette_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full gallery row from the `galleries` table.
///
/// `article_id` optionally links the gallery to one article; the link is
/// nulled by the database when that article is deleted.
#[derive(Debug, Clone, FromRow)]
pub struct Gallery {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub article_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new gallery.
#[derive(Debug, Clone, Default)]
pub struct CreateGallery {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub article_id: Option<DbId>,
}

/// Full-row replacement for an existing gallery.
pub type UpdateGallery = CreateGallery;

/// Full image row from the `images` table.
///
/// Display order within a gallery is `(sort_order, id)`.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: DbId,
    pub gallery_id: DbId,
    pub filename: String,
    pub caption: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

/// Fields for inserting a new image.
#[derive(Debug, Clone)]
pub struct CreateImage {
    pub gallery_id: DbId,
    pub filename: String,
    pub caption: String,
    pub sort_order: i32,
}
