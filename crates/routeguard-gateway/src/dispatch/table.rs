use std::sync::Arc;

use axum::response::Response;
use dashmap::DashMap;

use routeguard_core::{ParamMap, PolicyHandler, RouteFn, Session};

use crate::context::ServerContext;

/// Route function specialized to the gateway's response type.
pub type GatewayRouteFn = RouteFn<Response>;

/// Built-in route functions, looked up by name from config `handler:`
/// fields at boot.
#[derive(Default)]
pub struct RouteFnRegistry {
    fns: DashMap<&'static str, GatewayRouteFn>,
}

impl RouteFnRegistry {
    pub fn new() -> Self {
        Self {
            fns: DashMap::new(),
        }
    }

    pub fn register(&self, name: &'static str, f: GatewayRouteFn) {
        self.fns.insert(name, f);
    }

    pub fn get(&self, name: &str) -> Option<GatewayRouteFn> {
        self.fns.get(name).map(|r| r.value().clone())
    }

    pub fn registered(&self) -> Vec<&'static str> {
        self.fns.iter().map(|e| *e.key()).collect()
    }
}

/// One mounted route: the path it serves and the guard in front of it.
pub struct GuardedRoute {
    pub path: String,
    pub handler: PolicyHandler<ServerContext>,
}

/// Registered guards keyed by path.
///
/// Several guards may share a path; `select` walks them in registration
/// order and returns the first whose `can_handle` accepts the request.
#[derive(Default)]
pub struct RouteTable {
    routes: DashMap<String, Vec<Arc<GuardedRoute>>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: DashMap::new(),
        }
    }

    pub fn register(&self, route: GuardedRoute) {
        self.routes
            .entry(route.path.clone())
            .or_default()
            .push(Arc::new(route));
    }

    /// Paths with at least one guard, for router mounting.
    pub fn paths(&self) -> Vec<String> {
        self.routes.iter().map(|e| e.key().clone()).collect()
    }

    /// First-eligible-wins selection for `path`.
    pub fn select(
        &self,
        path: &str,
        session: &dyn Session,
        params: &ParamMap,
    ) -> Option<Arc<GuardedRoute>> {
        let entry = self.routes.get(path)?;
        entry
            .value()
            .iter()
            .find(|r| r.handler.can_handle(session, params))
            .cloned()
    }
}
