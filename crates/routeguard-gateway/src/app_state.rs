//! Shared application state for the RouteGuard gateway.
//!
//! Compiles the validated config into runtime pieces: one shared
//! [`ServerContext`], the session store, and the guarded route table with
//! built-in services resolved by name.

use std::sync::Arc;

use routeguard_core::error::{Result, RouteGuardError};
use routeguard_core::PolicyHandler;

use crate::config::GatewayConfig;
use crate::context::ServerContext;
use crate::dispatch::{GuardedRoute, RouteFnRegistry, RouteTable};
use crate::services;
use crate::session::MemorySessionStore;

const FAIL_FAST_ON_UNKNOWN_HANDLER: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    context: Arc<ServerContext>,
    sessions: Arc<MemorySessionStore>,
    table: Arc<RouteTable>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let context = Arc::new(ServerContext::from_config(&cfg));

        // 1) Built-in route functions
        let registry = RouteFnRegistry::new();
        services::register_builtins(&registry);

        // 2) One guard per configured route
        let table = RouteTable::new();
        for r in &cfg.routes {
            let route_fn = match &r.handler {
                Some(name) => {
                    let f = registry.get(name);
                    if f.is_none() {
                        tracing::warn!(
                            path = %r.path,
                            handler = %name,
                            "route refers to unregistered handler; mounting as no-op"
                        );
                        if FAIL_FAST_ON_UNKNOWN_HANDLER {
                            return Err(RouteGuardError::InvalidConfig(format!(
                                "route {} references unregistered handler: {name}",
                                r.path
                            )));
                        }
                    }
                    f
                }
                // No handler configured: the guard still enforces policy and
                // yields "nothing to render" when it passes.
                None => None,
            };

            table.register(GuardedRoute {
                path: r.path.clone(),
                handler: PolicyHandler::new(r.policy.to_policy(), Arc::clone(&context), route_fn),
            });
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                context,
                sessions: Arc::new(MemorySessionStore::new()),
                table: Arc::new(table),
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn context(&self) -> Arc<ServerContext> {
        Arc::clone(&self.inner.context)
    }

    pub fn sessions(&self) -> Arc<MemorySessionStore> {
        Arc::clone(&self.inner.sessions)
    }

    pub fn table(&self) -> Arc<RouteTable> {
        Arc::clone(&self.inner.table)
    }
}
