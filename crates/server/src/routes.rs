//! Router construction.
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → security headers → CatchPanicLayer → auth gate → handler
//! ```
//!
//! The auth gate wraps every route, `/` and the 404 fallback included.

use std::any::Any;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::auth::require_api_token;
use crate::error::panic_response;
use crate::handlers;
use crate::state::AppState;

/// Hardening headers added to every response unless a handler set them.
pub const SECURITY_HEADERS: [(&str, &str); 10] = [
    ("content-security-policy", "default-src 'self'"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
];

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let mode = state.config.mode;

    let app = Router::new()
        .route("/", get(handlers::root))
        .route("/movie", get(handlers::list_movies))
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), require_api_token))
        .layer(CatchPanicLayer::custom(
            move |payload: Box<dyn Any + Send + 'static>| panic_response(mode, payload),
        ))
        .with_state(state);

    with_security_headers(app)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn with_security_headers(router: Router) -> Router {
    SECURITY_HEADERS
        .iter()
        .fold(router, |router, &(name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ))
        })
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
