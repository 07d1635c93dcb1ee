//! Shared Application State
//!
//! The registry is the only shared mutable resource in the aggregator;
//! everything else in the state is read-only configuration.

use crate::config::Config;
use routedocs_core::Registry;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
pub struct AppState {
    pub registry: Registry,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            registry: Registry::new(),
            config: Arc::new(config),
        }
    }
}
