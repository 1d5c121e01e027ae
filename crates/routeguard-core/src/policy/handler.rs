//! Route guards: the policy decision ahead of handler invocation.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::RejectKind;
use crate::policy::context::DispatcherContext;
use crate::session::Session;

/// Route parameters extracted by the (external) pattern matcher.
/// Keys unique, insertion order irrelevant, read-only to guards.
pub type ParamMap = HashMap<String, Value>;

/// A wrapped route function: invoked only once the guard's policy has
/// passed. Failures it raises propagate to the caller unmodified.
pub type RouteFn<R> = Arc<dyn Fn(&mut dyn Session, &ParamMap) -> R + Send + Sync>;

type EligibleFn = Arc<dyn Fn(&dyn Session, &ParamMap) -> bool + Send + Sync>;

/// Access policy a guard enforces. Fixed at construction.
///
/// The variants form a refinement chain: `Authenticated` adds an identity
/// precondition over `Anonymous`, and `AuthenticatedExpirable` adds a
/// sliding-expiry precondition over `Authenticated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// No precondition; the route is visible to every caller.
    Anonymous,
    /// Requires `session.authenticated()`.
    Authenticated,
    /// Requires an unexpired session first, then authentication.
    AuthenticatedExpirable,
}

impl Policy {
    /// Label used in logs and config.
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::Anonymous => "anonymous",
            Policy::Authenticated => "authenticated",
            Policy::AuthenticatedExpirable => "authenticated_expirable",
        }
    }
}

/// Guard wrapping an optional route function behind a [`Policy`].
///
/// Holds a shared dispatcher context (injected at construction, outlives the
/// handler) used to resolve rejections into redirects. A handler built
/// without a route function is valid: under a passing policy it yields
/// `None` ("nothing to render") instead of failing.
pub struct PolicyHandler<C: DispatcherContext> {
    ctx: Arc<C>,
    policy: Policy,
    route_fn: Option<RouteFn<C::Response>>,
    eligible: Option<EligibleFn>,
}

impl<C: DispatcherContext> PolicyHandler<C> {
    pub fn new(policy: Policy, ctx: Arc<C>, route_fn: Option<RouteFn<C::Response>>) -> Self {
        Self {
            ctx,
            policy,
            route_fn,
            eligible: None,
        }
    }

    /// Guard with no precondition.
    pub fn anonymous(ctx: Arc<C>, route_fn: Option<RouteFn<C::Response>>) -> Self {
        Self::new(Policy::Anonymous, ctx, route_fn)
    }

    /// Guard requiring an authenticated session.
    pub fn authenticated(ctx: Arc<C>, route_fn: Option<RouteFn<C::Response>>) -> Self {
        Self::new(Policy::Authenticated, ctx, route_fn)
    }

    /// Guard requiring an unexpired, authenticated session.
    pub fn authenticated_expirable(ctx: Arc<C>, route_fn: Option<RouteFn<C::Response>>) -> Self {
        Self::new(Policy::AuthenticatedExpirable, ctx, route_fn)
    }

    /// Override the eligibility predicate (default: always eligible).
    /// The external routing layer consults it when several guards compete
    /// for one route; this crate only stores and evaluates the predicate.
    pub fn with_can_handle<F>(mut self, pred: F) -> Self
    where
        F: Fn(&dyn Session, &ParamMap) -> bool + Send + Sync + 'static,
    {
        self.eligible = Some(Arc::new(pred));
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Whether this guard is willing to handle the request at all.
    /// Distinct from the policy check: an eligible guard may still reject.
    pub fn can_handle(&self, session: &dyn Session, params: &ParamMap) -> bool {
        match &self.eligible {
            Some(pred) => pred(session, params),
            None => true,
        }
    }

    /// Run the policy and, if it passes, the wrapped route function.
    ///
    /// Returns the route function's response verbatim, `None` when the
    /// policy passes but no function is attached, or the context's redirect
    /// when the policy rejects. Every path is terminal within one call.
    pub fn handle(&self, session: &mut dyn Session, params: &ParamMap) -> Option<C::Response> {
        match self.policy {
            Policy::Anonymous => self.invoke(session, params),
            Policy::Authenticated => self.handle_authenticated(session, params),
            Policy::AuthenticatedExpirable => {
                // Expiry is checked first and short-circuits: an expired
                // session never reaches the authentication check.
                if session.is_expired(self.ctx.expiration_time_seconds()) {
                    // Mutate before building the response so rendering of
                    // the error page observes the post-expiry session.
                    session.expire();
                    return Some(self.reject(RejectKind::ExpiredSession));
                }
                self.handle_authenticated(session, params)
            }
        }
    }

    /// Shared authentication step: `AuthenticatedExpirable` delegates here
    /// on its non-expired path rather than duplicating the check.
    fn handle_authenticated(
        &self,
        session: &mut dyn Session,
        params: &ParamMap,
    ) -> Option<C::Response> {
        if session.authenticated() {
            self.invoke(session, params)
        } else {
            Some(self.reject(RejectKind::NotAuthorized))
        }
    }

    fn reject(&self, kind: RejectKind) -> C::Response {
        let path = self.ctx.on_error(kind);
        tracing::debug!(policy = self.policy.as_str(), kind = kind.as_str(), %path, "policy rejected request");
        self.ctx.redirect(&path)
    }

    /// Call-if-present: a guard with no route function behaves as a
    /// pass-through no-op, never as a failure.
    fn invoke(&self, session: &mut dyn Session, params: &ParamMap) -> Option<C::Response> {
        self.route_fn.as_ref().map(|f| f(session, params))
    }
}
