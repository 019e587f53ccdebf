//! Errors returned by the auth flow
//!
//! Every failure ends up as one of three HTTP outcomes: 400 for a rejected
//! submission, 401 for a bad session, 500 for anything the directory or the
//! signer could not do.

use chatdoor_common::AppError;
use chatdoor_core::DomainError;
use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    /// Raised by the user directory or a domain value
    Domain(DomainError),

    /// Credential, token or configuration failure
    App(AppError),

    /// Submission rejected before touching the directory
    Validation(String),

    /// Username already registered
    Conflict(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => fmt::Display::fmt(e, f),
            Self::App(e) => fmt::Display::fmt(e, f),
            Self::Validation(msg) | Self::Conflict(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            Self::Validation(_) | Self::Conflict(_) => None,
        }
    }
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// HTTP status this error answers with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::Conflict(_) => 400,
            Self::App(e) => e.status_code(),
            Self::Domain(e) if e.is_validation() || e.is_conflict() => 400,
            Self::Domain(_) => 500,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Conflict(msg) => AppError::Conflict(msg),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
