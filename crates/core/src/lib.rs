//! routedocs core: extraction → inference → synthesis pipeline.
//!
//! Framework adapters produce [`route::RouteDescription`]s from a live
//! route table, [`infer`] fills in documentation fields from method and
//! path alone, the [`registry::Registry`] keeps each application's latest
//! list, and [`openapi`] turns a list into a complete OpenAPI 3.0
//! document. [`source`] defines the process-boundary protocol and the
//! remote introspection adapter.

pub mod infer;
pub mod openapi;
pub mod registry;
pub mod route;
pub mod source;

pub use openapi::{OpenApiDocument, synthesize, synthesize_with_info};
pub use registry::Registry;
pub use route::{HttpMethod, RegistrationAck, RegistrationPayload, RouteDescription};
