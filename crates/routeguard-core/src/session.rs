//! Session seam consumed by policy guards.

/// Per-user server-side state as the guards see it.
///
/// The core only ever performs, per `handle` call, at most one read of
/// authentication state, at most one expiry query, and at most one
/// `expire()` mutation. Lifetime, storage, issuance, and concurrency
/// control all belong to the implementor.
pub trait Session {
    /// Whether the session carries a verified identity.
    fn authenticated(&self) -> bool;

    /// Pure query: has the session been inactive longer than
    /// `threshold_secs`? Must not mutate state.
    fn is_expired(&self, threshold_secs: u64) -> bool;

    /// Transition the session toward a logged-out state. The exact
    /// post-state is the implementor's; guards call this strictly before
    /// building the expiry redirect so that downstream rendering observes
    /// the post-expiry session.
    fn expire(&mut self);
}
