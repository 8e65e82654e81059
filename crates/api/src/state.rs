use std::sync::Arc;

use crate::auth::session::SessionSigner;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gazette_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Session token issuer/verifier, keyed by the process-lifetime secret.
    pub sessions: SessionSigner,
}
