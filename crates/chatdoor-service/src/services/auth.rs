//! Authentication service
//!
//! Handles user registration, login and session token verification.

use chatdoor_common::AppError;
use chatdoor_core::value_objects::Username;
use chatdoor_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, RegisterRequest, RegisterResponse, SessionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message returned when a username is already registered
pub const USER_EXISTS_MESSAGE: &str = "This user already exists";

/// Result of a successful login
///
/// The token is handed to the client as a cookie, never in a body.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub username: String,
    pub token: String,
}

impl std::fmt::Debug for LoginOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginOutcome")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// The username is trimmed before the lookup and the insert.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        let username = Username::normalize(&request.username).map_err(|e| match e {
            DomainError::InvalidUsername(msg) => ServiceError::validation(msg),
            other => ServiceError::from(other),
        })?;

        if self.ctx.user_repo().exists(username.as_str()).await? {
            info!(username = %username, "Registration rejected: username taken");
            return Err(ServiceError::conflict(USER_EXISTS_MESSAGE));
        }

        let password_hash = self.ctx.credential_hasher().hash(&request.password);

        // A concurrent registration can still win between the check and the insert
        let user = self
            .ctx
            .user_repo()
            .create(&username, &password_hash)
            .await
            .map_err(|e| match e {
                DomainError::UsernameTaken(_) => {
                    info!(username = %username, "Registration lost insert race");
                    ServiceError::conflict(USER_EXISTS_MESSAGE)
                }
                other => ServiceError::from(other),
            })?;

        info!(username = %user.username, "User registered successfully");

        Ok(RegisterResponse::from(user))
    }

    /// Login with username and password
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginOutcome> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !self
            .ctx
            .credential_hasher()
            .verify(&request.password, &user.password_hash)
        {
            warn!("Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self.ctx.session_issuer().issue(&user.username)?;

        info!("User logged in successfully");

        Ok(LoginOutcome {
            username: user.username,
            token,
        })
    }

    /// Verify a session token and return the identity it carries
    #[instrument(skip(self, token))]
    pub fn verify_session(&self, token: &str) -> ServiceResult<SessionResponse> {
        let claims = self.ctx.session_issuer().verify(token)?;
        Ok(SessionResponse::from(claims))
    }

    /// Whether the user directory answers a health probe
    pub async fn directory_ready(&self) -> bool {
        match self.ctx.user_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "User directory health check failed");
                false
            }
        }
    }
}
