//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present). Everything is read once at startup and passed down explicitly.

use std::env;

/// Longest accepted token or cookie lifetime, in seconds (ten years)
pub const MAX_SESSION_LIFETIME_SECS: i64 = 315_360_000;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub session_cookie: SessionCookieConfig,
    pub password: PasswordConfig,
    pub static_files: StaticConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// User directory (database) configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Session token signing configuration
///
/// `secret` stays optional here so that a missing value is reported by the
/// session issuer itself, which refuses to start without one.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: Option<String>,
    pub token_expiry: i64,
}

/// Session cookie configuration
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub name: String,
    pub max_age: i64,
}

/// Credential hasher configuration
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub hash_secret: String,
}

/// Static page configuration
#[derive(Debug, Clone)]
pub struct StaticConfig {
    pub dir: String,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "chatdoor".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_token_expiry() -> i64 {
    604_800 // 7 days
}

fn default_cookie_name() -> String {
    "jwtToken".to_string()
}

fn default_cookie_max_age() -> i64 {
    604_800 // 7 days
}

fn default_hash_secret() -> String {
    crate::auth::DEFAULT_HASH_SECRET.to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            max_age: default_cookie_max_age(),
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            hash_secret: default_hash_secret(),
        }
    }
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a set variable
    /// cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "PORT", default_port)?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
            },
            jwt: JwtConfig {
                secret: lookup("JWT_SECRET_KEY").filter(|s| !s.is_empty()),
                token_expiry: parse_lifetime(&lookup, "JWT_TOKEN_EXPIRY", default_token_expiry)?,
            },
            session_cookie: SessionCookieConfig {
                name: default_cookie_name(),
                max_age: parse_lifetime(
                    &lookup,
                    "SESSION_COOKIE_MAX_AGE",
                    default_cookie_max_age,
                )?,
            },
            password: PasswordConfig {
                hash_secret: lookup("PASSWORD_HASH_SECRET").unwrap_or_else(default_hash_secret),
            },
            static_files: StaticConfig {
                dir: lookup("STATIC_DIR").unwrap_or_else(default_static_dir),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Parse an optional variable, falling back to a default when unset
fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Parse a lifetime in seconds, which must be positive and at most
/// [`MAX_SESSION_LIFETIME_SECS`]
fn parse_lifetime<F>(
    lookup: &F,
    key: &'static str,
    default: fn() -> i64,
) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let seconds = parse_or(lookup, key, default)?;
    if (1..=MAX_SESSION_LIFETIME_SECS).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(ConfigError::InvalidValue(key, seconds.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
