//! routedocs Aggregator Library Crate
//!
//! The long-lived process holding the application registry and serving
//! documentation reads and registration writes across the process
//! boundary. The `aggregator` binary is a thin wrapper around this
//! library.

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod ui;
