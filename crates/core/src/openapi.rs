//! OpenAPI 3.0 Document Synthesis
//!
//! Converts a list of [`RouteDescription`]s into a complete OpenAPI 3.0
//! document: routes are grouped by path, one operation per HTTP method,
//! with structurally required defaults backfilled. Synthesis is a pure
//! function of its inputs — no network, no storage — and serializes
//! byte-identically for the same input (all maps are ordered).

use crate::route::{
    HttpMethod, Parameter, RequestBody, ResponseObject, RouteDescription,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const OPENAPI_VERSION: &str = "3.0.0";

/// The `info` section of a synthesized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            description: "Auto-generated API documentation".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// All operations registered under one path. At most one operation per
/// verb; re-registration for the same method and path replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

impl PathItem {
    fn slot_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Patch => &mut self.patch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Always non-empty: a "200" entry is backfilled when the route
    /// carries no responses.
    pub responses: BTreeMap<String, ResponseObject>,
}

impl From<&RouteDescription> for Operation {
    fn from(route: &RouteDescription) -> Self {
        let mut responses = route.responses.clone();
        if responses.is_empty() {
            responses.insert(
                "200".to_string(),
                ResponseObject::plain("Successful response"),
            );
        }
        Self {
            summary: route.summary.clone(),
            description: route.description.clone(),
            tags: route.tags.clone(),
            parameters: route.parameters.clone(),
            request_body: route.request_body.clone(),
            responses,
        }
    }
}

/// A complete OpenAPI 3.0 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: BTreeMap<String, PathItem>,
}

/// Synthesizes a document with the default `info` section.
pub fn synthesize(routes: &[RouteDescription], base_url: &str) -> OpenApiDocument {
    synthesize_with_info(routes, base_url, Info::default())
}

/// Synthesizes a document from a route list.
///
/// Later routes win on a method+path collision, matching the registry's
/// last-write-wins semantics upstream. An empty route list produces a
/// well-formed document with an empty `paths` map.
pub fn synthesize_with_info(
    routes: &[RouteDescription],
    base_url: &str,
    info: Info,
) -> OpenApiDocument {
    let mut paths: BTreeMap<String, PathItem> = BTreeMap::new();

    for route in routes {
        let item = paths.entry(route.path.clone()).or_default();
        *item.slot_mut(route.method) = Some(Operation::from(route));
    }

    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info,
        servers: vec![Server {
            url: base_url.to_string(),
            description: None,
        }],
        paths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer;
    use crate::route::Schema;

    fn route(method: HttpMethod, path: &str) -> RouteDescription {
        infer::enrich(RouteDescription::new(method, path, "handler"))
    }

    #[test]
    fn test_empty_route_list_yields_well_formed_document() {
        let doc = synthesize(&[], "http://localhost:3000");

        assert_eq!(doc.openapi, "3.0.0");
        assert_eq!(doc.info.title, "API Documentation");
        assert_eq!(doc.servers.len(), 1);
        assert_eq!(doc.servers[0].url, "http://localhost:3000");
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn test_routes_group_by_path() {
        let routes = vec![
            route(HttpMethod::Get, "/users"),
            route(HttpMethod::Post, "/users"),
            route(HttpMethod::Get, "/users/:id"),
        ];
        let doc = synthesize(&routes, "http://localhost:3000");

        assert_eq!(doc.paths.len(), 2);
        let users = &doc.paths["/users"];
        assert!(users.get.is_some());
        assert!(users.post.is_some());
        assert!(users.put.is_none());
        assert!(doc.paths["/users/:id"].get.is_some());
    }

    #[test]
    fn test_later_route_wins_on_method_path_collision() {
        let mut first = route(HttpMethod::Get, "/users");
        first.summary = Some("old".to_string());
        let mut second = route(HttpMethod::Get, "/users");
        second.summary = Some("new".to_string());

        let doc = synthesize(&[first, second], "http://localhost:3000");

        let operation = doc.paths["/users"].get.as_ref().unwrap();
        assert_eq!(operation.summary.as_deref(), Some("new"));
    }

    #[test]
    fn test_missing_responses_backfilled_with_200() {
        // A bare, unenriched route: no responses at all.
        let bare = RouteDescription::new(HttpMethod::Get, "/ping", "ping");
        let doc = synthesize(&[bare], "http://localhost:3000");

        let operation = doc.paths["/ping"].get.as_ref().unwrap();
        assert_eq!(operation.responses.len(), 1);
        assert_eq!(
            operation.responses["200"].description,
            "Successful response"
        );
    }

    #[test]
    fn test_enriched_route_carries_parameters_and_body() {
        let routes = vec![route(HttpMethod::Put, "/products/:id")];
        let doc = synthesize(&routes, "http://localhost:3000");

        let operation = doc.paths["/products/:id"].put.as_ref().unwrap();
        assert_eq!(operation.tags, vec!["Products"]);
        assert_eq!(operation.parameters.len(), 1);
        assert_eq!(operation.parameters[0].name, "id");
        assert!(operation.request_body.is_some());
        assert!(operation.responses.contains_key("404"));
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let routes = vec![
            route(HttpMethod::Get, "/users"),
            route(HttpMethod::Post, "/users"),
            route(HttpMethod::Get, "/products/:id"),
        ];

        let a = serde_json::to_string(&synthesize(&routes, "http://localhost:3000")).unwrap();
        let b = serde_json::to_string(&synthesize(&routes, "http://localhost:3000")).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_document_serialization_shape() {
        let mut described = RouteDescription::new(HttpMethod::Post, "/users", "create_user");
        described.request_body = Some(crate::route::RequestBody::json(Schema::object()));
        let doc = synthesize(&[described], "http://localhost:3000");

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["openapi"], "3.0.0");
        assert!(json["paths"]["/users"]["post"]["requestBody"].is_object());
        // Unset verbs are absent, not null.
        assert!(json["paths"]["/users"].get("get").is_none());
    }
}
