//! Axum Handlers for the Aggregator API
//!
//! Registration writes into the registry; documentation reads resolve the
//! target application from the `x-app-port` header, pull its routes and
//! synthesize the OpenAPI document on demand. An unregistered port is a
//! normal state and yields an empty, well-formed document.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use routedocs_core::openapi::{self, Info};
use routedocs_core::route::{RegistrationAck, RegistrationPayload};
use routedocs_core::source::APP_PORT_HEADER;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

pub enum ApiError {
    BadRequest(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Accept a registration payload and replace the stored route list for
/// the submitting application's port. A malformed body is rejected with
/// 400 and leaves the registry unchanged.
pub async fn register_app(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegistrationPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::BadRequest(format!("malformed registration payload: {rejection}"))
    })?;

    let port = payload.port;
    let registered = payload.routes.len();
    state.registry.register_app(port, payload.routes).await;
    info!(port, registered, "registered application routes");

    Ok((StatusCode::OK, Json(RegistrationAck { registered, port })))
}

/// Synthesize and return the OpenAPI document for the application named
/// by the `x-app-port` header.
pub async fn docs_json(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<openapi::OpenApiDocument>, ApiError> {
    let port = headers
        .get(APP_PORT_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest(format!("{APP_PORT_HEADER} header is required")))?;
    let port = port.parse::<u16>().map_err(|_| {
        ApiError::BadRequest(format!("{APP_PORT_HEADER} header must be a port number"))
    })?;

    let routes = state.registry.routes_for(&port.to_string()).await;
    let base_url = format!("http://{}:{}", state.config.app_host, port);
    let doc_info = Info {
        title: state.config.doc_title.clone(),
        version: state.config.doc_version.clone(),
        ..Info::default()
    };

    Ok(Json(openapi::synthesize_with_info(
        &routes, &base_url, doc_info,
    )))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
