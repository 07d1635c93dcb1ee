//! Axum Router Configuration
//!
//! Wires the aggregator's three external interfaces — registration
//! submission, document retrieval and the docs UI — plus a health probe.

use crate::{handlers, state::AppState, ui};
use axum::{
    Router,
    routing::{get, post},
};
use routedocs_core::source::{DOCS_JSON_PATH, DOCS_PATH, REGISTER_PATH};
use std::sync::Arc;

/// Creates the main Axum router for the aggregator.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(REGISTER_PATH, post(handlers::register_app))
        .route(DOCS_PATH, get(ui::docs_ui))
        .route(DOCS_JSON_PATH, get(handlers::docs_json))
        .route("/health", get(handlers::health))
        .with_state(app_state)
}
