//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::DeploymentMode;

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(mode: DeploymentMode) -> &'static str {
    match mode {
        DeploymentMode::Production => "info",
        DeploymentMode::Development => "info,server=debug,pipeline=debug,tower_http=debug",
    }
}

/// Install the global subscriber. Production logs are compact and omit
/// targets; development logs use the full format.
pub fn init_tracing(mode: DeploymentMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(mode)));

    match mode {
        DeploymentMode::Production => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init(),
        DeploymentMode::Development => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
