//! Authorization gate.
//!
//! Every request must carry `Authorization: <scheme> <token>` where the
//! token equals the configured secret. The scheme segment is not checked.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Check a raw `Authorization` header value against the secret.
///
/// The value is split on single spaces and the second segment must equal
/// `secret` exactly. A missing header or a value with no second segment fails.
pub fn check_authorization(header: Option<&str>, secret: &str) -> Result<(), ApiError> {
    let token = header.and_then(|value| value.split(' ').nth(1));

    match token {
        Some(token) if token == secret => Ok(()),
        _ => Err(ApiError::Unauthorized),
    }
}

/// axum middleware applying [`check_authorization`] before any route runs.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if let Err(err) = check_authorization(header, &state.config.api_token) {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            has_header = header.is_some(),
            "Rejected request: invalid authorization token"
        );
        return err.into_response_for(state.config.mode);
    }

    next.run(request).await
}
