//! Session handler

use axum::Json;
use chatdoor_service::dto::SessionResponse;

use crate::extractors::SessionUser;

/// Identity of the current session
///
/// GET /session
pub async fn current_session(user: SessionUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        username: user.username,
    })
}
