//! Docs Proxy and Introspection Endpoint
//!
//! Two small route groups an instrumented app mounts alongside its own
//! routes: a proxy that forwards `/docs` and `/docs/json` to the
//! aggregator (tagging the request with the app's port), and the reserved
//! introspection endpoint consumed by remote adapters.

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use routedocs_core::route::RouteDescription;
use routedocs_core::source::{APP_PORT_HEADER, DOCS_JSON_PATH, DOCS_PATH, INTROSPECTION_PATH};
use std::sync::Arc;
use tracing::warn;

struct ProxyState {
    client: reqwest::Client,
    aggregator_url: String,
    port: u16,
}

/// A router serving `/docs` and `/docs/json` by proxying to the
/// aggregator. The response body is treated as opaque; only status and
/// content type are forwarded back.
pub fn docs_proxy(aggregator_url: impl Into<String>, port: u16) -> Router {
    let state = Arc::new(ProxyState {
        client: reqwest::Client::new(),
        aggregator_url: aggregator_url.into(),
        port,
    });

    Router::new()
        .route(DOCS_PATH, get(forward))
        .route(DOCS_JSON_PATH, get(forward))
        .with_state(state)
}

async fn forward(State(state): State<Arc<ProxyState>>, uri: Uri) -> Response {
    let target = format!(
        "{}{}",
        state.aggregator_url.trim_end_matches('/'),
        uri.path()
    );

    let upstream = match state
        .client
        .get(&target)
        .header(APP_PORT_HEADER, state.port.to_string())
        .send()
        .await
    {
        Ok(upstream) => upstream,
        Err(error) => {
            warn!(%error, %target, "docs aggregator not reachable");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                "docs aggregator not reachable",
            )
                .into_response();
        }
    };

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    match upstream.bytes().await {
        Ok(body) => (status, [(header::CONTENT_TYPE, content_type)], body).into_response(),
        Err(error) => {
            warn!(%error, %target, "failed to read docs aggregator response");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "failed to read docs aggregator response",
            )
                .into_response()
        }
    }
}

/// A router serving the reserved introspection endpoint: the app's route
/// list as a JSON array, for aggregator-side remote adapters.
pub fn introspection_router(routes: Vec<RouteDescription>) -> Router {
    Router::new()
        .route(INTROSPECTION_PATH, get(serve_routes))
        .with_state(Arc::new(routes))
}

async fn serve_routes(
    State(routes): State<Arc<Vec<RouteDescription>>>,
) -> Json<Vec<RouteDescription>> {
    Json(routes.as_ref().clone())
}
