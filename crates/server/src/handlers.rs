//! Route handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pipeline::QueryParams;

use crate::error::ApiError;
use crate::state::AppState;

pub const GREETING: &str = "Hello, world!";

/// `GET /`
pub async fn root() -> &'static str {
    GREETING
}

/// `GET /movie`
///
/// Runs the filter chain and serializes the resulting view. Any failure is
/// turned into a response here, using the configured deployment mode.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Response {
    match state.chain.run(&params, &state.dataset) {
        Ok(movies) => {
            tracing::debug!(returned = movies.len(), "Serving movies");
            (StatusCode::OK, Json(movies)).into_response()
        }
        Err(err) => ApiError::from(err).into_response_for(state.config.mode),
    }
}
