//! Business logic services
//!
//! The service layer orchestrates the user directory, the credential hasher
//! and the session issuer.

pub mod auth;
pub mod context;
pub mod error;

// Re-export all services for convenience
pub use auth::{AuthService, LoginOutcome};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
