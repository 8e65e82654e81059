//! Database access layer: connection pool, migrations, models, repositories.
//!
//! Each table has a model struct under [`models`] and a stateless repository
//! under [`repositories`] exposing parameterized-SQL CRUD. Repositories
//! return `sqlx::Error` unchanged; classification into HTTP outcomes happens
//! in the API crate.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a bounded connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Cheap liveness probe used at startup and by the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations. Already-applied migrations are skipped by
/// sqlx's migration bookkeeping, so this is safe to run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
