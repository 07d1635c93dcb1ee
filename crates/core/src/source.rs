//! Route Sources and the Remote Introspection Adapter
//!
//! A [`RouteSource`] is anything that can produce the current route list
//! of a running application. In-process adapters implement it over a live
//! router; [`RemoteAdapter`] implements it over the process boundary by
//! fetching the app's reserved introspection endpoint.
//!
//! This module also pins down the boundary protocol constants shared by
//! both sides: reserved paths, the port header, and the default
//! aggregator address.

use crate::route::RouteDescription;
use async_trait::async_trait;
use thiserror::Error;

/// Reserved path on an instrumented app returning its route list as JSON.
pub const INTROSPECTION_PATH: &str = "/__routedocs_routes";

/// Aggregator path accepting registration payloads.
pub const REGISTER_PATH: &str = "/api/register";

/// Aggregator path serving the documentation UI shell.
pub const DOCS_PATH: &str = "/docs";

/// Aggregator path serving the synthesized OpenAPI document as JSON.
pub const DOCS_JSON_PATH: &str = "/docs/json";

/// Header carrying the target application's port on documentation reads.
/// Required because one aggregator instance serves many apps.
pub const APP_PORT_HEADER: &str = "x-app-port";

/// Where apps reach the aggregator unless configured otherwise.
pub const DEFAULT_AGGREGATOR_URL: &str = "http://localhost:6174";

/// Failure to obtain a route list from a remote application. No partial
/// list is ever produced: introspection either yields the full list or
/// one of these.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to fetch routes from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to decode route list from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Produces the current route list of a running application.
#[async_trait]
pub trait RouteSource: Send + Sync {
    async fn routes(&self) -> Result<Vec<RouteDescription>, SourceError>;
}

/// A [`RouteSource`] for applications instrumented remotely: issues a
/// single GET against the app's introspection endpoint and decodes the
/// JSON array of route descriptions it returns.
pub struct RemoteAdapter {
    app_url: String,
    client: reqwest::Client,
}

impl RemoteAdapter {
    /// `app_url` is the application's base URL, e.g. `http://localhost:3000`.
    pub fn new(app_url: impl Into<String>) -> Self {
        Self {
            app_url: app_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn introspection_url(&self) -> String {
        format!(
            "{}{}",
            self.app_url.trim_end_matches('/'),
            INTROSPECTION_PATH
        )
    }
}

#[async_trait]
impl RouteSource for RemoteAdapter {
    async fn routes(&self) -> Result<Vec<RouteDescription>, SourceError> {
        let url = self.introspection_url();
        tracing::debug!(%url, "fetching remote route table");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| SourceError::Fetch {
                url: url.clone(),
                source,
            })?;

        response
            .json::<Vec<RouteDescription>>()
            .await
            .map_err(|source| SourceError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_url_handles_trailing_slash() {
        let adapter = RemoteAdapter::new("http://localhost:3000/");
        assert_eq!(
            adapter.introspection_url(),
            "http://localhost:3000/__routedocs_routes"
        );

        let adapter = RemoteAdapter::new("http://localhost:3000");
        assert_eq!(
            adapter.introspection_url(),
            "http://localhost:3000/__routedocs_routes"
        );
    }
}
