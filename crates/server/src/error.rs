//! API error types and the single place they become HTTP responses.

use std::any::Any;

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use pipeline::FilterError;
use serde_json::json;
use thiserror::Error;

use crate::config::DeploymentMode;

pub const UNAUTHORIZED_MESSAGE: &str = "Please provide a valid Authorization Token";
pub const GENERIC_SERVER_ERROR: &str = "server error";

/// Every way a request can fail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed or incorrect credential.
    #[error("unauthorized")]
    Unauthorized,

    /// A filter parameter the client can fix. The message is sent as plain text.
    #[error("{0}")]
    InvalidArgument(String),

    /// Anything unanticipated.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<FilterError> for ApiError {
    fn from(err: FilterError) -> Self {
        match err {
            FilterError::InvalidArgument { .. } => ApiError::InvalidArgument(err.to_string()),
            FilterError::Internal(inner) => ApiError::Internal(inner),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error. Internal failure detail is only exposed outside production.
    pub fn into_response_for(self, mode: DeploymentMode) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": UNAUTHORIZED_MESSAGE })),
            )
                .into_response(),
            ApiError::InvalidArgument(message) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                message,
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "Request failed");
                internal_error_response(format!("{err:#}"), mode)
            }
        }
    }
}

/// Without a mode to hand, assume production and keep internals private.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_response_for(DeploymentMode::Production)
    }
}

fn internal_error_response(detail: String, mode: DeploymentMode) -> Response {
    let message = if mode.is_production() {
        GENERIC_SERVER_ERROR.to_string()
    } else {
        detail
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": { "message": message } })),
    )
        .into_response()
}

/// Response for a handler panic caught by `CatchPanicLayer`.
pub fn panic_response(mode: DeploymentMode, payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    internal_error_response(format!("panic: {detail}"), mode)
}
