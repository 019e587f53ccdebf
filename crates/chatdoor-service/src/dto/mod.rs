//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs for the login and registration forms
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterRequest};

pub use responses::{
    HealthChecks, HealthResponse, ReadinessResponse, RegisterResponse, SessionResponse,
};
