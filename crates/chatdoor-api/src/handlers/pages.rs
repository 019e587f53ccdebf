//! Static page handlers
//!
//! The landing, registration and chat pages are plain files from the static
//! directory.

use axum::{
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::debug;

use crate::state::AppState;

/// Landing page
///
/// GET /
///
/// The session cookie is read and logged but does not change the page.
pub async fn index(State(state): State<AppState>, jar: CookieJar, request: Request) -> Response {
    let token = jar.get(state.session_cookie_name()).map(|c| c.value().to_string());
    debug!(session_cookie = ?token, "Landing page requested");

    serve_page(&state, "index.html", request).await
}

/// Registration page
///
/// GET /register
pub async fn register_page(State(state): State<AppState>, request: Request) -> Response {
    serve_page(&state, "register.html", request).await
}

/// Chat page
///
/// GET /chat
pub async fn chat(State(state): State<AppState>, request: Request) -> Response {
    serve_page(&state, "chat.html", request).await
}

async fn serve_page(state: &AppState, file: &str, request: Request) -> Response {
    let path = state.static_dir().join(file);
    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
