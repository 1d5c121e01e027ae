//! RouteGuard core: transport-agnostic request-authorization primitives.
//!
//! This crate defines the policy contracts shared by the gateway and any
//! embedding router: the [`Session`] seam, the [`DispatcherContext`] seam,
//! and the [`PolicyHandler`] guard that decides whether a matched route's
//! wrapped function may run. It intentionally carries no transport or
//! runtime dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Policy rejection is never an error: it resolves into a redirect response
//! through the dispatcher context. `RouteGuardError`/`Result` cover only
//! genuine failures (config, bootstrap, storage).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;
pub mod session;

/// Shared result type.
pub use error::{RejectKind, Result, RouteGuardError};
pub use policy::{DispatcherContext, ParamMap, Policy, PolicyHandler, RouteFn};
pub use session::Session;
