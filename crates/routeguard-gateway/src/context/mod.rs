//! Concrete dispatcher context shared across layers.
//!
//! The core's `DispatcherContext` seam stays opaque over its response type;
//! here it is pinned to axum responses so guards can short-circuit straight
//! into the HTTP pipeline.

pub mod server;

pub use server::ServerContext;
