//! Server crate for the Moviedex API.
//!
//! Wires the filter chain into an axum router behind the authorization
//! gate, and turns every failure into a response in one place.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;

pub use config::{Args, DeploymentMode, ServerConfig};
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
