//! In-Memory Application Registry
//!
//! Maps an application's listening port to its most recently registered
//! route list. Registration is last-write-wins per port, with no history:
//! apps are expected to re-register cheaply at their own startup, and the
//! whole store is deliberately lost on aggregator restart.

use crate::route::RouteDescription;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Thread-safe store of per-application route lists, keyed by port.
///
/// A single reader/writer lock guards the whole map: readers never block
/// readers, a writer excludes all others, and a read racing a write for
/// the same port observes either the old or the new list in full.
#[derive(Debug, Default)]
pub struct Registry {
    apps: RwLock<HashMap<String, Vec<RouteDescription>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing entry for `port` with `routes`.
    pub async fn register_app(&self, port: u16, routes: Vec<RouteDescription>) {
        tracing::debug!(port, count = routes.len(), "storing route list");
        let mut apps = self.apps.write().await;
        apps.insert(port.to_string(), routes);
    }

    /// Returns the stored route list for `port`, or an empty list if the
    /// port was never registered. Callers treat "no app" and "app with
    /// zero routes" identically, so this never errors.
    pub async fn routes_for(&self, port: &str) -> Vec<RouteDescription> {
        let apps = self.apps.read().await;
        apps.get(port).cloned().unwrap_or_default()
    }

    /// Number of applications currently registered.
    pub async fn app_count(&self) -> usize {
        self.apps.read().await.len()
    }
}
