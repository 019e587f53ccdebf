//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context and configuration.

use std::path::Path;
use std::sync::Arc;

use chatdoor_common::AppConfig;
use chatdoor_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Name of the cookie that carries the session token
    pub fn session_cookie_name(&self) -> &str {
        &self.config.session_cookie.name
    }

    /// Directory the static pages are served from
    pub fn static_dir(&self) -> &Path {
        Path::new(&self.config.static_files.dir)
    }

    /// Whether 5xx bodies may carry the underlying error text
    pub fn expose_error_details(&self) -> bool {
        !self.config.app.env.is_production()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
