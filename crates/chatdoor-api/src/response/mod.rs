//! Response types and error handling for API endpoints
//!
//! Every rejection answers with `{message}`; server errors answer with
//! `{message: "Internal server error", error}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chatdoor_common::{AppError, ErrorResponse};
use chatdoor_service::ServiceError;
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    /// Create a bad request error for a body that could not be read
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    fn into_app_error(self) -> AppError {
        match self {
            Self::App(e) => e,
            Self::Service(e) => e.into(),
            Self::BadRequest(msg) => AppError::Validation(msg),
        }
    }
}

/// Full error text of a server error
///
/// Attached to the response so that [`crate::middleware`] can decide whether
/// it reaches the client.
#[derive(Debug, Clone)]
pub struct ServerErrorDetail(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.into_app_error();
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Only the error code goes out unless the detail layer says otherwise
        let body = ErrorResponse::from_error(&err, false);

        if status.is_server_error() {
            error!(error = ?err, "Server error occurred");
            let detail = ErrorResponse::from_error(&err, true).error.unwrap_or_default();
            let mut response = (status, Json(body)).into_response();
            response.extensions_mut().insert(ServerErrorDetail(detail));
            return response;
        }

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
