//! Authentication handlers
//!
//! Endpoints for user registration and login.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chatdoor_common::SessionCookieConfig;
use chatdoor_service::dto::{LoginRequest, RegisterRequest};
use chatdoor_service::AuthService;

use crate::extractors::FormOrJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Where a successful login sends the browser
pub const CHAT_PATH: &str = "/chat";

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    FormOrJson(request): FormOrJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(([(header::LOCATION, "/")], Created(Json(response))))
}

/// Login with username and password
///
/// POST /login
///
/// Sets the session cookie and redirects to the chat page.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    FormOrJson(request): FormOrJson<LoginRequest>,
) -> ApiResult<(CookieJar, Redirect)> {
    let service = AuthService::new(state.service_context());
    let outcome = service.login(request).await?;

    let cookie = session_cookie(&state.config().session_cookie, outcome.token);
    Ok((jar.add(cookie), Redirect::to(CHAT_PATH)))
}

/// Build the HTTP-only session cookie
///
/// No `Secure` flag: the pages are served over plain HTTP in development.
fn session_cookie(config: &SessionCookieConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.name.clone(), token))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::seconds(config.max_age))
        .build()
}
