use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gazette_api::auth::password::hash_password;
use gazette_api::auth::session::SessionSigner;
use gazette_api::config::ServerConfig;
use gazette_api::routes::build_app_router;
use gazette_api::state::AppState;
use gazette_db::models::user::CreateUser;
use gazette_db::repositories::UserRepo;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gazette_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = gazette_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    gazette_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    gazette_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    // --- Upload storage ---
    tokio::fs::create_dir_all(&config.storage_path)
        .await
        .expect("Failed to create storage directory");

    // --- Bootstrap admin ---
    seed_admin(&pool, &config).await;

    // --- Session signing ---
    // The secret lives only in this process: restarting the server
    // invalidates every outstanding session.
    let sessions = SessionSigner::new(SessionSigner::generate_secret(), config.session_ttl_days);

    // --- App state and router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        sessions,
    };
    let app = build_app_router(state);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Create the bootstrap admin account when the users table is empty.
async fn seed_admin(pool: &gazette_db::DbPool, config: &ServerConfig) {
    let count = UserRepo::count(pool).await.expect("Failed to count users");
    if count > 0 {
        return;
    }

    let password = config.admin_password.clone().unwrap_or_else(|| {
        tracing::warn!("ADMIN_PASSWORD not set, seeding admin with default password 'admin'");
        "admin".to_string()
    });
    let password_hash = hash_password(&password).expect("Failed to hash admin password");

    UserRepo::create(
        pool,
        &CreateUser {
            name: "Admin".to_string(),
            surname: String::new(),
            nickname: "admin".to_string(),
            password_hash,
            is_admin: true,
        },
    )
    .await
    .expect("Failed to seed admin user");

    tracing::info!("Seeded initial admin user (nickname: admin)");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
