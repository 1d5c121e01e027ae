//! RouteGuard gateway library entry.
//!
//! This crate wires the config, dispatcher context, session store, route
//! table, and built-in page services into a cohesive guarded HTTP stack. It
//! is intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod ops;
pub mod router;
pub mod services;
pub mod session;
