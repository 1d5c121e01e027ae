use std::sync::Arc;

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::dispatch::{GatewayRouteFn, RouteFnRegistry};

/// Landing page; typically mounted behind the anonymous policy.
pub fn home() -> GatewayRouteFn {
    Arc::new(|session, _params| {
        Json(json!({
            "page": "home",
            "authenticated": session.authenticated(),
        }))
        .into_response()
    })
}

/// Parameterized page; echoes the extracted route params.
pub fn profile() -> GatewayRouteFn {
    Arc::new(|_session, params| {
        Json(json!({
            "page": "profile",
            "params": params,
        }))
        .into_response()
    })
}

pub fn dashboard() -> GatewayRouteFn {
    Arc::new(|_session, _params| {
        Json(json!({
            "page": "dashboard",
        }))
        .into_response()
    })
}

/// Register every built-in under its config-facing name.
pub fn register_builtins(registry: &RouteFnRegistry) {
    registry.register("home", home());
    registry.register("profile", profile());
    registry.register("dashboard", dashboard());
}
