//! routedocs adapter for axum applications.
//!
//! An app wires this in three steps: build its routes through the
//! recording [`DocumentedRouter`], mount [`docs_proxy`] (and optionally
//! [`introspection_router`]) next to them, and call [`announce`] once at
//! startup to register the recorded table with the aggregator.
//!
//! ```no_run
//! use routedocs_axum::{DocumentedRouter, announce, docs_proxy};
//! use routedocs_core::source::DEFAULT_AGGREGATOR_URL;
//!
//! # async fn list_users() -> &'static str { "[]" }
//! # async fn run() {
//! let (router, routes) = DocumentedRouter::new()
//!     .get("/users", list_users)
//!     .merge_undocumented(docs_proxy(DEFAULT_AGGREGATOR_URL, 3000))
//!     .into_parts();
//! announce(DEFAULT_AGGREGATOR_URL, 3000, routes).await;
//! # let _ = router;
//! # }
//! ```

pub mod client;
pub mod proxy;
pub mod recorder;

pub use client::{RegistrationError, announce, register};
pub use proxy::{docs_proxy, introspection_router};
pub use recorder::DocumentedRouter;
