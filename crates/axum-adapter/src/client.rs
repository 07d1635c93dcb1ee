//! Registration Client
//!
//! Sends an application's extracted route list to the docs aggregator.
//! Descriptions are enriched by the inference engine before they cross
//! the process boundary, so the aggregator only ever stores complete
//! documentation records.

use routedocs_core::infer;
use routedocs_core::route::{RegistrationAck, RegistrationPayload, RouteDescription};
use routedocs_core::source::REGISTER_PATH;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{info, warn};

/// Failure to register with the aggregator. Never fatal to the app; the
/// caller decides whether to retry on a later startup.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("docs aggregator not reachable at {url}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("docs aggregator rejected registration: {status}")]
    Rejected { status: reqwest::StatusCode },
    #[error("could not decode aggregator acknowledgement")]
    InvalidAck {
        #[source]
        source: reqwest::Error,
    },
}

/// Enriches `routes` and registers them with the aggregator at
/// `aggregator_url`, returning the acknowledged route count.
pub async fn register(
    aggregator_url: &str,
    port: u16,
    routes: Vec<RouteDescription>,
) -> Result<RegistrationAck, RegistrationError> {
    let payload = RegistrationPayload {
        routes: routes.into_iter().map(infer::enrich).collect(),
        port,
        schema_files: BTreeMap::new(),
    };

    let url = format!("{}{}", aggregator_url.trim_end_matches('/'), REGISTER_PATH);
    let response = reqwest::Client::new()
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(|source| RegistrationError::Unreachable {
            url: url.clone(),
            source,
        })?;

    if !response.status().is_success() {
        return Err(RegistrationError::Rejected {
            status: response.status(),
        });
    }

    response
        .json::<RegistrationAck>()
        .await
        .map_err(|source| RegistrationError::InvalidAck { source })
}

/// Like [`register`], but reports the outcome to the log and never fails:
/// an unreachable aggregator leaves the app undocumented, not broken.
pub async fn announce(aggregator_url: &str, port: u16, routes: Vec<RouteDescription>) {
    match register(aggregator_url, port, routes).await {
        Ok(ack) => {
            info!(
                port,
                registered = ack.registered,
                "registered routes with docs aggregator"
            );
            info!("docs available at http://localhost:{port}/docs");
        }
        Err(error) => {
            warn!(%error, "docs registration failed; app continues without documentation");
        }
    }
}
