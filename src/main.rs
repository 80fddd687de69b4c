//! FypHub Server — academic project management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use fyphub_core::config::AppConfig;
use fyphub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("FYPHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FypHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = fyphub_database::connection::create_pool(&config.database).await?;
    fyphub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let admin_repo = Arc::new(fyphub_database::repositories::AdminRepository::new(
        db_pool.clone(),
    ));
    let supervisor_repo = Arc::new(fyphub_database::repositories::SupervisorRepository::new(
        db_pool.clone(),
    ));
    let student_repo = Arc::new(fyphub_database::repositories::StudentRepository::new(
        db_pool.clone(),
    ));
    let project_repo = Arc::new(fyphub_database::repositories::ProjectRepository::new(
        db_pool.clone(),
    ));
    let proposal_repo = Arc::new(fyphub_database::repositories::ProposalRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Initialize auth system ───────────────────────────
    let password_hasher = Arc::new(fyphub_auth::password::PasswordHasher::new());
    let token_issuer = Arc::new(fyphub_auth::jwt::issuer::TokenIssuer::new(&config.auth));
    let token_verifier = Arc::new(fyphub_auth::jwt::verifier::TokenVerifier::new(&config.auth));

    let directory = Arc::new(fyphub_auth::store::RoleDirectory::new(
        Arc::clone(&admin_repo) as Arc<dyn fyphub_auth::store::IdentityStore>,
        Arc::clone(&supervisor_repo) as Arc<dyn fyphub_auth::store::IdentityStore>,
        Arc::clone(&student_repo) as Arc<dyn fyphub_auth::store::IdentityStore>,
    ));

    let session_manager = Arc::new(fyphub_auth::session::manager::SessionManager::new(
        Arc::clone(&token_issuer),
        Arc::clone(&directory),
        Arc::clone(&password_hasher),
    ));

    // ── Step 4: Bootstrap default admin ──────────────────────────
    // Bootstrap failure must not abort startup.
    if let Err(e) =
        fyphub_auth::session::ensure_default_admin(&admin_repo, &password_hasher, &config.bootstrap)
            .await
    {
        tracing::error!("Error initializing admin: {}", e);
    }

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = fyphub_api::state::AppState {
        config: Arc::new(config.clone()),
        session_manager,
        token_verifier,
        directory,
        password_hasher,
        supervisor_repo,
        student_repo,
        project_repo,
        proposal_repo,
    };

    let app = fyphub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("FypHub server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("FypHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
