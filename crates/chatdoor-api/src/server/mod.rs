//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chatdoor_common::{AppConfig, AppError, CredentialHasher, SessionIssuer};
use chatdoor_core::traits::UserRepository;
use chatdoor_db::{create_pool, ensure_schema, PgUserRepository};
use chatdoor_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_error_details, apply_middleware};
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state.config().static_files);
    let router = apply_error_details(router, state.clone());
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The session issuer is built before the database is touched, so a missing
/// signing secret stops startup immediately.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let session_issuer = SessionIssuer::from_config(&config.jwt)?;

    info!("Connecting to PostgreSQL...");
    let db_config = chatdoor_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let user_repo = Arc::new(PgUserRepository::new(pool));
    build_app_state(config, user_repo, session_issuer)
}

/// Assemble AppState around an already constructed user directory
pub fn build_app_state(
    config: AppConfig,
    user_repo: Arc<dyn UserRepository>,
    session_issuer: SessionIssuer,
) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .credential_hasher(CredentialHasher::new(config.password.hash_secret.clone()))
        .session_issuer(session_issuer)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;

    let app = create_app(state);

    run_server(app, addr).await
}
