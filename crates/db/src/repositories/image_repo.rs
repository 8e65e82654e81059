//! Repository for the `images` table.

use gazette_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{CreateImage, Image};

const COLUMNS: &str = "id, gallery_id, filename, caption, sort_order, created_at";

/// Provides CRUD operations for gallery images.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (gallery_id, filename, caption, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(input.gallery_id)
            .bind(&input.filename)
            .bind(&input.caption)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find an image by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a gallery's images in display order: `sort_order`, ties broken
    /// by `id`.
    pub async fn list_by_gallery(
        pool: &PgPool,
        gallery_id: DbId,
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM images WHERE gallery_id = $1 ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(gallery_id)
            .fetch_all(pool)
            .await
    }

    /// Hard-delete an image. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
