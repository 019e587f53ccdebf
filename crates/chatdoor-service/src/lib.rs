//! # chatdoor-service
//!
//! Application layer containing the auth flow, its dependency container and
//! the request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{AuthService, LoginOutcome, ServiceContext, ServiceContextBuilder};
pub use services::{ServiceError, ServiceResult};
