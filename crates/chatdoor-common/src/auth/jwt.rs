//! Session tokens
//!
//! Signs and verifies HS256 JWTs carrying the username claim, using the
//! `jsonwebtoken` crate. Expiry is checked against an injectable [`Clock`].

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use crate::config::{JwtConfig, MAX_SESSION_LIFETIME_SECS};
use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Username the session was issued to
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
    clock: Arc<dyn Clock>,
}

impl SessionIssuer {
    /// Create an issuer with the given secret and token lifetime in seconds
    ///
    /// # Errors
    /// Returns `AppError::Config` if the secret is empty, or if the lifetime
    /// is not positive or exceeds [`MAX_SESSION_LIFETIME_SECS`]
    pub fn new(secret: &str, token_expiry: i64) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::Config(
                "JWT_SECRET_KEY is not defined".to_string(),
            ));
        }

        if !(1..=MAX_SESSION_LIFETIME_SECS).contains(&token_expiry) {
            return Err(AppError::Config(format!(
                "JWT_TOKEN_EXPIRY must be between 1 and {MAX_SESSION_LIFETIME_SECS} seconds, got {token_expiry}"
            )));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
            clock: Arc::new(SystemClock),
        })
    }

    /// Create an issuer from configuration
    ///
    /// # Errors
    /// Returns `AppError::Config` if no signing secret is configured
    pub fn from_config(config: &JwtConfig) -> Result<Self, AppError> {
        let secret = config
            .secret
            .as_deref()
            .ok_or_else(|| AppError::Config("JWT_SECRET_KEY is not defined".to_string()))?;

        Self::new(secret, config.token_expiry)
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Token lifetime in seconds
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Issue a signed session token for a username
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(Duration::seconds(self.token_expiry))
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Token expiry out of range")))?;

        let claims = SessionClaims {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate a session token
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` for a bad signature or malformed
    /// token, and `AppError::TokenExpired` once the clock reaches `exp`.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the injected clock
        validation.validate_exp = false;

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?;

        let claims = token_data.claims;
        if self.clock.now().timestamp() >= claims.exp {
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("token_expiry", &self.token_expiry)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
