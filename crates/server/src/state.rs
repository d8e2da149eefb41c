//! Shared, read-only request state.

use std::sync::Arc;

use data_loader::Dataset;
use pipeline::FilterChain;

use crate::config::ServerConfig;

/// Everything a handler needs. Cloned per request; all fields are `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub chain: Arc<FilterChain>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State with the standard genre → country → avg_vote chain.
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig) -> Self {
        Self::with_chain(dataset, FilterChain::standard(), config)
    }

    pub fn with_chain(dataset: Arc<Dataset>, chain: FilterChain, config: ServerConfig) -> Self {
        Self {
            dataset,
            chain: Arc::new(chain),
            config: Arc::new(config),
        }
    }
}
