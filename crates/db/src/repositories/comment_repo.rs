//! Repository for the `comments` table.

use gazette_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

const COLUMNS: &str = "id, article_id, author_name, content, approved, created_at";

/// Provides CRUD and moderation operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment. The row always starts unapproved.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (article_id, author_name, content, approved)
             VALUES ($1, $2, $3, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.article_id)
            .bind(&input.author_name)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List an article's comments, newest first, optionally restricted to
    /// approved ones (the public view).
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
        approved_only: bool,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE article_id = $1 AND (approved = TRUE OR $2 = FALSE)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .bind(approved_only)
            .fetch_all(pool)
            .await
    }

    /// List all comments across articles, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY created_at DESC");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// Number of comments awaiting moderation.
    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE approved = FALSE")
            .fetch_one(pool)
            .await
    }

    /// Approve a comment. Returns `true` if a row was updated.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE comments SET approved = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
