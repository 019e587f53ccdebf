//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain values to response DTOs.

use chatdoor_common::SessionClaims;
use chatdoor_core::entities::User;

use super::responses::{RegisterResponse, SessionResponse};

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self::created(user.username.clone())
    }
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self::created(user.username)
    }
}

impl From<SessionClaims> for SessionResponse {
    fn from(claims: SessionClaims) -> Self {
        Self {
            username: claims.username,
        }
    }
}
