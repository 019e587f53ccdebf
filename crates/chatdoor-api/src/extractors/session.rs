//! Session extractor
//!
//! Reads the session token from the session cookie, or from an
//! `Authorization: Bearer` header, and verifies it.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization, HeaderMapExt},
};
use chatdoor_common::AppError;
use chatdoor_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// User identified by a valid session token
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub username: String,
}

/// Find the session token in a request, cookie first
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = session_token(&parts.headers, app_state.session_cookie_name())
            .ok_or(ApiError::App(AppError::MissingAuth))?;

        let session = AuthService::new(app_state.service_context())
            .verify_session(&token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected session token");
                ApiError::Service(e)
            })?;

        Ok(SessionUser {
            username: session.username,
        })
    }
}
