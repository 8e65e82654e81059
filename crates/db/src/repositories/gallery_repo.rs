//! Repository for the `galleries` table.

use gazette_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{CreateGallery, Gallery, UpdateGallery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, article_id, created_at, updated_at";

/// Provides CRUD operations for galleries. Image rows within a gallery are
/// managed by [`crate::repositories::ImageRepo`].
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a new gallery, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGallery) -> Result<Gallery, sqlx::Error> {
        let query = format!(
            "INSERT INTO galleries (title, slug, description, article_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.article_id)
            .fetch_one(pool)
            .await
    }

    /// Find a gallery by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE id = $1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a gallery by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE slug = $1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find the gallery attached to an article, if any.
    pub async fn find_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE article_id = $1 LIMIT 1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(article_id)
            .fetch_optional(pool)
            .await
    }

    /// List all galleries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries ORDER BY created_at DESC");
        sqlx::query_as::<_, Gallery>(&query).fetch_all(pool).await
    }

    /// Total number of galleries.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM galleries")
            .fetch_one(pool)
            .await
    }

    /// Full-row replace by id, bumping `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET
                title = $2, slug = $3, description = $4, article_id = $5, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.article_id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a gallery (its images cascade). Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
