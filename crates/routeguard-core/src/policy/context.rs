//! Dispatcher-context seam.

use crate::error::RejectKind;

/// Server-wide services a guard needs to resolve a rejection: the configured
/// expiry threshold, the error-path table, and redirect construction.
///
/// Construct once at startup, then share via `Arc`; it outlives every
/// handler built on it. Read-mostly from the core's viewpoint. The response
/// type stays opaque: guards forward it, never inspect it.
pub trait DispatcherContext {
    /// Response produced by route functions and by `redirect`.
    type Response;

    /// Seconds of inactivity after which an authenticated session is
    /// treated as expired.
    fn expiration_time_seconds(&self) -> u64;

    /// Pure lookup: the path a rejected request should be sent to.
    fn on_error(&self, kind: RejectKind) -> String;

    /// Build the rejection response for `path`.
    fn redirect(&self, path: &str) -> Self::Response;
}
