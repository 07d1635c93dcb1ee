//! Framework-Agnostic Route Description Model
//!
//! This module defines the data shapes shared by every adapter, the
//! inference engine, the registry, and the OpenAPI synthesizer. The serde
//! field names match the JSON registration wire format exactly, so a
//! payload produced by any instrumented framework decodes into these types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The HTTP verbs a route description can carry.
///
/// Serialized in uppercase (`"GET"`, `"POST"`, ...) to match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Whether this method conventionally carries a request body.
    pub fn has_request_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
            Self::Patch => write!(f, "PATCH"),
        }
    }
}

impl TryFrom<&str> for HttpMethod {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            other => Err(format!("unsupported HTTP method: {other}")),
        }
    }
}

/// A minimal recursive JSON-Schema-like tree.
///
/// This is a description, not a validator: no constraint semantics are
/// implied. `BTreeMap` keeps property order stable so repeated synthesis
/// serializes byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub schema_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::of_type("string")
    }

    pub fn number() -> Self {
        Self::of_type("number")
    }

    pub fn integer() -> Self {
        Self::of_type("integer")
    }

    pub fn object() -> Self {
        Self::of_type("object")
    }

    /// An object schema with the given named properties.
    pub fn object_with(properties: impl IntoIterator<Item = (&'static str, Schema)>) -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_string(), schema))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: "array".to_string(),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }
}

/// Where a parameter lives in the request. Only path parameters are
/// derived today, but the wire format already carries the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
}

/// One operation parameter, derived 1:1 from `:name` tokens in the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    pub schema: Schema,
}

/// A media type entry inside a request body or response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTypeObject {
    pub schema: Schema,
}

/// An operation request body: a required flag plus one schema per media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    pub content: BTreeMap<String, MediaTypeObject>,
}

impl RequestBody {
    /// A required `application/json` body with the given schema.
    pub fn json(schema: Schema) -> Self {
        Self {
            required: true,
            content: BTreeMap::from([(
                "application/json".to_string(),
                MediaTypeObject { schema },
            )]),
        }
    }
}

/// One response entry, keyed elsewhere by its status-code string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseObject {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaTypeObject>>,
}

impl ResponseObject {
    pub fn plain(description: &str) -> Self {
        Self {
            description: description.to_string(),
            content: None,
        }
    }

    /// A response carrying an `application/json` body with the given schema.
    pub fn json(description: &str, schema: Schema) -> Self {
        Self {
            description: description.to_string(),
            content: Some(BTreeMap::from([(
                "application/json".to_string(),
                MediaTypeObject { schema },
            )])),
        }
    }
}

/// One HTTP-routable endpoint, as extracted from a framework's route table.
///
/// Adapters fill in `method`, `path` and `handler`; the documentation
/// fields may be left empty for the inference engine to populate. Once a
/// description is handed to the registry it is never mutated: each
/// registration builds a fresh list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescription {
    pub method: HttpMethod,
    /// Route pattern with `:name` tokens marking variable segments.
    pub path: String,
    /// Opaque handler identity, supplied by the adapter. Diagnostics only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub handler: String,
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
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<String, ResponseObject>,
}

impl RouteDescription {
    /// A bare description with only the facts a framework can supply
    /// directly. Everything else is left for enrichment.
    pub fn new(method: HttpMethod, path: &str, handler: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            handler: handler.to_string(),
            summary: None,
            description: None,
            tags: Vec::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: BTreeMap::new(),
        }
    }
}

/// The unit that crosses the process boundary from an app to the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub routes: Vec<RouteDescription>,
    pub port: u16,
    /// Supplementary schema files keyed by name. Carried on the wire for
    /// forward compatibility; not consumed by synthesis yet.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub schema_files: BTreeMap<String, String>,
}

/// The aggregator's acknowledgement of a successful registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationAck {
    pub registered: usize,
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_format() {
        assert_eq!(serde_json::to_string(&HttpMethod::Get).unwrap(), "\"GET\"");
        assert_eq!(
            serde_json::to_string(&HttpMethod::Delete).unwrap(),
            "\"DELETE\""
        );

        let parsed: HttpMethod = serde_json::from_str("\"PATCH\"").unwrap();
        assert_eq!(parsed, HttpMethod::Patch);
    }

    #[test]
    fn test_method_try_from_is_case_insensitive() {
        assert_eq!(HttpMethod::try_from("get").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::try_from("Post").unwrap(), HttpMethod::Post);
        assert!(HttpMethod::try_from("TRACE").is_err());
    }

    #[test]
    fn test_method_display() {
        assert_eq!(format!("{}", HttpMethod::Put), "PUT");
    }

    #[test]
    fn test_schema_serialization_uses_type_key() {
        let schema = Schema::object_with([("name", Schema::string())]);
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["type"], "object");
        assert_eq!(json["properties"]["name"]["type"], "string");
        assert!(json.get("format").is_none());
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_schema_array_items() {
        let schema = Schema::array(Schema::integer());
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["type"], "array");
        assert_eq!(json["items"]["type"], "integer");
    }

    #[test]
    fn test_route_description_wire_format() {
        let mut route = RouteDescription::new(HttpMethod::Post, "/users", "create_user");
        route.request_body = Some(RequestBody::json(Schema::object()));
        route
            .responses
            .insert("200".to_string(), ResponseObject::plain("Success"));

        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["method"], "POST");
        assert_eq!(json["path"], "/users");
        assert_eq!(json["handler"], "create_user");
        // camelCase on the wire, and empty enrichment fields stay absent.
        assert!(json.get("requestBody").is_some());
        assert!(json.get("request_body").is_none());
        assert!(json.get("tags").is_none());
        assert!(json.get("parameters").is_none());
    }

    #[test]
    fn test_parameter_wire_format() {
        let param = Parameter {
            name: "id".to_string(),
            location: ParameterLocation::Path,
            required: true,
            schema: Schema::string(),
        };
        let json = serde_json::to_value(&param).unwrap();

        assert_eq!(json["in"], "path");
        assert_eq!(json["required"], true);
        assert_eq!(json["schema"]["type"], "string");
    }

    #[test]
    fn test_registration_payload_round_trip() {
        let payload = RegistrationPayload {
            routes: vec![RouteDescription::new(HttpMethod::Get, "/health", "health")],
            port: 3000,
            schema_files: BTreeMap::new(),
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"port\":3000"));

        let decoded: RegistrationPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.routes.len(), 1);
        assert_eq!(decoded.routes[0].path, "/health");
    }

    #[test]
    fn test_registration_payload_decodes_sparse_routes() {
        // A minimal remote payload: only the facts the framework supplies.
        let json = r#"{"routes":[{"method":"GET","path":"/users/:id"}],"port":8080}"#;
        let payload: RegistrationPayload = serde_json::from_str(json).unwrap();

        let route = &payload.routes[0];
        assert_eq!(route.method, HttpMethod::Get);
        assert_eq!(route.path, "/users/:id");
        assert!(route.handler.is_empty());
        assert!(route.tags.is_empty());
        assert!(route.responses.is_empty());
    }

    #[test]
    fn test_registration_payload_rejects_missing_port() {
        let json = r#"{"routes":[]}"#;
        let result: Result<RegistrationPayload, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
