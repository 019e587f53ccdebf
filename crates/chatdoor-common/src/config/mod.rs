//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    PasswordConfig, ServerConfig, SessionCookieConfig, StaticConfig, MAX_SESSION_LIFETIME_SECS,
};
