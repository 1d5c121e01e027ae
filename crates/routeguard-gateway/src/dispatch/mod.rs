//! Route table and built-in handler registry.
//!
//! The guard selection loop lives here: given a matched path, pick the
//! first registered guard whose `can_handle` accepts the request. The
//! guards themselves (policy evaluation, redirects) live in the core.

pub mod table;

pub use table::{GatewayRouteFn, GuardedRoute, RouteFnRegistry, RouteTable};
