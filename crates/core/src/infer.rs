//! Heuristic Documentation Inference
//!
//! Given nothing but an HTTP method and a path pattern, this module fills
//! in the documentation fields of a [`RouteDescription`]: tags, summary,
//! description, path parameters, response set and a best-guess request
//! body schema.
//!
//! Every function here is a pure function of its inputs and fully
//! deterministic: the same `(method, path)` pair always yields the same
//! output, across processes and restarts, so repeated registrations stay
//! stable for diffing and testing. Inference never fails; anything
//! unrecognized falls through to a generic default. The schemas are an
//! explicit approximation from path keywords, not contract inference.

use crate::route::{
    HttpMethod, Parameter, ParameterLocation, RequestBody, ResponseObject, RouteDescription,
    Schema,
};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Tag used when a path has no usable first segment (e.g. `/`).
pub const FALLBACK_TAG: &str = "API";

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\w+)").expect("invalid path parameter pattern"));

/// Fills every empty documentation field of `route`. Fields the adapter
/// (or an upstream annotation) already populated are left untouched.
pub fn enrich(mut route: RouteDescription) -> RouteDescription {
    if route.tags.is_empty() {
        route.tags = derive_tags(&route.path);
    }
    if route.parameters.is_empty() {
        route.parameters = path_parameters(&route.path);
    }
    if route.summary.is_none() {
        route.summary = Some(summary_for(route.method, &route.path));
    }
    if route.description.is_none() {
        route.description = Some(description_for(&route.path));
    }
    if route.responses.is_empty() {
        route.responses = response_map(route.method, &route.path);
    }
    if route.request_body.is_none() && route.method.has_request_body() {
        route.request_body = Some(RequestBody::json(request_schema_for(&route.path)));
    }
    route
}

/// Derives the UI grouping tag from the first non-empty path segment,
/// upper-casing its first character. `/products/:id` → `["Products"]`,
/// `/` → `["API"]`.
pub fn derive_tags(path: &str) -> Vec<String> {
    let first = path.split('/').find(|segment| !segment.is_empty());
    match first {
        Some(segment) => {
            let mut chars = segment.chars();
            let tag = match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => FALLBACK_TAG.to_string(),
            };
            vec![tag]
        }
        None => vec![FALLBACK_TAG.to_string()],
    }
}

/// One required, string-typed path parameter per `:name` token, in
/// left-to-right order.
pub fn path_parameters(path: &str) -> Vec<Parameter> {
    PATH_PARAM
        .captures_iter(path)
        .map(|capture| Parameter {
            name: capture[1].to_string(),
            location: ParameterLocation::Path,
            required: true,
            schema: Schema::string(),
        })
        .collect()
}

/// The conventional response set for a method/path pair: "200", "400" and
/// "500" always; "201" for POST; "404" whenever the path addresses a
/// specific resource via a parameter token.
pub fn response_map(method: HttpMethod, path: &str) -> BTreeMap<String, ResponseObject> {
    let mut responses = BTreeMap::from([
        (
            "200".to_string(),
            ResponseObject::json("Successful response", Schema::object()),
        ),
        ("400".to_string(), ResponseObject::plain("Bad request")),
        (
            "500".to_string(),
            ResponseObject::plain("Internal server error"),
        ),
    ]);

    if method == HttpMethod::Post {
        responses.insert(
            "201".to_string(),
            ResponseObject::json("Created successfully", Schema::object()),
        );
    }
    if path.contains(':') {
        responses.insert(
            "404".to_string(),
            ResponseObject::plain("Resource not found"),
        );
    }

    responses
}

/// Ordered keyword → request-schema rules. The first keyword contained in
/// the path wins; later keywords are not composed in. Paths matching no
/// rule get a generic `{name, email}` object.
fn request_schema_rules() -> [(&'static str, Schema); 2] {
    [
        (
            "product",
            Schema::object_with([
                ("name", Schema::string()),
                ("price", Schema::number()),
                ("stock", Schema::integer()),
            ]),
        ),
        (
            "user",
            Schema::object_with([
                ("name", Schema::string()),
                ("email", Schema::string().with_format("email")),
                ("age", Schema::integer()),
            ]),
        ),
    ]
}

/// Best-guess request body schema for a path. Explicitly an approximation.
pub fn request_schema_for(path: &str) -> Schema {
    for (keyword, schema) in request_schema_rules() {
        if path.contains(keyword) {
            return schema;
        }
    }
    Schema::object_with([("name", Schema::string()), ("email", Schema::string())])
}

/// A short human-readable summary: an action verb from the method plus a
/// resource keyword guessed from the path.
pub fn summary_for(method: HttpMethod, path: &str) -> String {
    let action = match method {
        HttpMethod::Get => "Get",
        HttpMethod::Post => "Create",
        HttpMethod::Put | HttpMethod::Patch => "Update",
        HttpMethod::Delete => "Delete",
    };

    let resource = if path.contains("user") {
        "user"
    } else if path.contains("product") {
        "product"
    } else if path.contains("auth") {
        "authentication"
    } else {
        "resource"
    };

    format!("{action} {resource}")
}

/// A one-sentence description keyed off well-known path fragments.
pub fn description_for(path: &str) -> String {
    if path.contains("login") {
        "Authenticate user and return JWT token".to_string()
    } else if path.contains("register") {
        "Register new user account".to_string()
    } else if path.contains(':') {
        "Operation on specific resource by ID".to_string()
    } else {
        "API endpoint operation".to_string()
    }
}
