use axum::response::{IntoResponse, Redirect, Response};

use routeguard_core::{DispatcherContext, RejectKind};

use crate::config::{ErrorPathsSection, GatewayConfig};

/// Server-wide context injected into every guard: expiry threshold plus the
/// error-path table. Built once from config, shared via Arc, outlives all
/// handlers.
pub struct ServerContext {
    expiration_time_seconds: u64,
    error_paths: ErrorPathsSection,
}

impl ServerContext {
    pub fn from_config(cfg: &GatewayConfig) -> Self {
        Self {
            expiration_time_seconds: cfg.session.expiration_time_seconds,
            error_paths: cfg.error_paths.clone(),
        }
    }

    /// Context with defaults except the expiry threshold. Test-friendly.
    pub fn with_expiration(expiration_time_seconds: u64) -> Self {
        Self {
            expiration_time_seconds,
            error_paths: ErrorPathsSection::default(),
        }
    }
}

impl DispatcherContext for ServerContext {
    type Response = Response;

    fn expiration_time_seconds(&self) -> u64 {
        self.expiration_time_seconds
    }

    fn on_error(&self, kind: RejectKind) -> String {
        match kind {
            RejectKind::NotAuthorized => self.error_paths.not_authorized.clone(),
            RejectKind::ExpiredSession => self.error_paths.expired_session.clone(),
        }
    }

    fn redirect(&self, path: &str) -> Response {
        // 303: the client re-fetches the error page with GET regardless of
        // the rejected request's method.
        Redirect::to(path).into_response()
    }
}
