//! # chatdoor-common
//!
//! Shared utilities including configuration, error handling, credential
//! hashing, session tokens, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    Clock, CredentialHasher, ManualClock, SessionClaims, SessionIssuer, SystemClock,
    DEFAULT_HASH_SECRET,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    PasswordConfig, ServerConfig, SessionCookieConfig, StaticConfig,
};
pub use error::{AppError, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
