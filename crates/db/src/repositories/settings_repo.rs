//! Repository for the `settings` key-value table.

use sqlx::PgPool;

use crate::models::setting::Setting;

/// Provides get/set access to global settings. Writes are upserts, so rows
/// come into existence on first write.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Read one setting value. `None` when the key has never been written.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT setting_value FROM settings WHERE setting_key = $1")
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List all settings rows ordered by key.
    pub async fn get_all(pool: &PgPool) -> Result<Vec<Setting>, sqlx::Error> {
        sqlx::query_as::<_, Setting>(
            "SELECT setting_key, setting_value FROM settings ORDER BY setting_key",
        )
        .fetch_all(pool)
        .await
    }

    /// Upsert one setting row.
    pub async fn set(pool: &PgPool, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO settings (setting_key, setting_value) VALUES ($1, $2)
             ON CONFLICT (setting_key) DO UPDATE SET setting_value = EXCLUDED.setting_value",
        )
        .bind(key)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(())
    }
}
