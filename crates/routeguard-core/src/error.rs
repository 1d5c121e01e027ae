//! Shared error type across RouteGuard crates.

use thiserror::Error;

/// Policy-rejection kinds (stable API).
///
/// These are expected, modeled outcomes of a guard decision, not errors:
/// the dispatcher context maps each kind to a redirect path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectKind {
    /// Session lacks authentication.
    NotAuthorized,
    /// Session authenticated but past its sliding expiry window.
    ExpiredSession,
}

impl RejectKind {
    /// String representation used in logs and response metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            RejectKind::NotAuthorized => "NOT_AUTHORIZED",
            RejectKind::ExpiredSession => "EXPIRED_SESSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RouteGuardError>;

/// Unified error type used by core and gateway.
///
/// Policy rejections never surface here; this covers config parsing,
/// bootstrap, and session-storage failures.
#[derive(Debug, Error)]
pub enum RouteGuardError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("session store: {0}")]
    SessionStore(String),
    #[error("internal: {0}")]
    Internal(String),
}
