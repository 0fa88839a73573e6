//! Client-visible errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use relish_core::{SessionError, SessionId};
use serde::{Deserialize, Serialize};

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Errors surfaced by route handlers.
#[derive(Debug)]
pub enum ApiError {
    SessionNotFound(SessionId),
    JoinPageNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) | ApiError::JoinPageNotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            ApiError::SessionNotFound(_) => "Session not found",
            ApiError::JoinPageNotFound => "Join page not found",
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(id) => ApiError::SessionNotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::SessionNotFound(id) = &self {
            log::warn!("Session not found: {}", id);
        }
        let body = ErrorBody {
            detail: self.detail().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
