//! Route definitions
//!
//! Pages and form endpoints at the root, health probes under /health, and
//! the static directory for everything else.

use axum::{
    routing::{get, post},
    Router,
};
use chatdoor_common::StaticConfig;
use tower_http::services::ServeDir;

use crate::handlers::{auth, health, pages, session};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(static_config: &StaticConfig) -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(health_routes())
        .fallback_service(ServeDir::new(&static_config.dir))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Static page routes
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/chat", get(pages::chat))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", get(pages::register_page).post(auth::register))
        .route("/session", get(session::current_session))
}
