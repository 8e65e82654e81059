use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Directory where uploaded images are written and served from.
    pub storage_path: PathBuf,
    /// Password for the bootstrap admin account seeded on an empty users
    /// table. When unset, seeding falls back to `admin` with a warning.
    pub admin_password: Option<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session cookie and token lifetime in days (default: `7`).
    pub session_ttl_days: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `3000`      |
    /// | `STORAGE_PATH`         | `./uploads` |
    /// | `ADMIN_PASSWORD`       | (unset)     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    /// | `SESSION_TTL_DAYS`     | `7`         |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let storage_path = PathBuf::from(
            std::env::var("STORAGE_PATH").unwrap_or_else(|_| "./uploads".into()),
        );

        let admin_password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_ttl_days: i64 = std::env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| "7".into())
            .parse()
            .expect("SESSION_TTL_DAYS must be a valid i64");

        Self {
            host,
            port,
            storage_path,
            admin_password,
            request_timeout_secs,
            session_ttl_days,
        }
    }
}
