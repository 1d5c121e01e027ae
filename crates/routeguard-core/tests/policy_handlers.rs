#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use routeguard_core::{DispatcherContext, ParamMap, PolicyHandler, RejectKind, RouteFn, Session};

// --------------------
// Fakes
// --------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum FakeResponse {
    Page(&'static str),
    RedirectTo(String),
}

struct FakeContext {
    threshold: u64,
}

impl DispatcherContext for FakeContext {
    type Response = FakeResponse;

    fn expiration_time_seconds(&self) -> u64 {
        self.threshold
    }

    fn on_error(&self, kind: RejectKind) -> String {
        match kind {
            RejectKind::NotAuthorized => "/login".to_string(),
            RejectKind::ExpiredSession => "/login?expired=1".to_string(),
        }
    }

    fn redirect(&self, path: &str) -> FakeResponse {
        FakeResponse::RedirectTo(path.to_string())
    }
}

#[derive(Debug, Default)]
struct FakeSession {
    authenticated: bool,
    inactive_secs: u64,
    expired: bool,
    expire_calls: usize,
}

impl Session for FakeSession {
    fn authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_expired(&self, threshold_secs: u64) -> bool {
        self.expired || self.inactive_secs > threshold_secs
    }

    fn expire(&mut self) {
        self.expire_calls += 1;
        self.expired = true;
        self.authenticated = false;
    }
}

fn ctx() -> Arc<FakeContext> {
    Arc::new(FakeContext { threshold: 1800 })
}

fn counting_fn(calls: Arc<AtomicUsize>) -> RouteFn<FakeResponse> {
    Arc::new(move |_s, _p| {
        calls.fetch_add(1, Ordering::SeqCst);
        FakeResponse::Page("ok")
    })
}

// --------------------
// Authenticated guard
// --------------------

#[test]
fn authenticated_rejects_anonymous_caller() {
    let calls = Arc::new(AtomicUsize::new(0));
    let guard = PolicyHandler::authenticated(ctx(), Some(counting_fn(calls.clone())));

    let mut s = FakeSession::default();
    let out = guard.handle(&mut s, &ParamMap::new());

    assert_eq!(out, Some(FakeResponse::RedirectTo("/login".into())));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn authenticated_invokes_once_and_forwards_result() {
    let calls = Arc::new(AtomicUsize::new(0));
    let guard = PolicyHandler::authenticated(ctx(), Some(counting_fn(calls.clone())));

    let mut s = FakeSession {
        authenticated: true,
        ..Default::default()
    };
    let out = guard.handle(&mut s, &ParamMap::new());

    assert_eq!(out, Some(FakeResponse::Page("ok")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn authenticated_passes_session_and_params_through() {
    let seen: Arc<std::sync::Mutex<Option<(bool, usize)>>> =
        Arc::new(std::sync::Mutex::new(None));
    let seen2 = seen.clone();
    let f: RouteFn<FakeResponse> = Arc::new(move |s, p| {
        *seen2.lock().unwrap() = Some((s.authenticated(), p.len()));
        FakeResponse::Page("ok")
    });
    let guard = PolicyHandler::authenticated(ctx(), Some(f));

    let mut params = ParamMap::new();
    params.insert("id".into(), serde_json::json!(42));
    let mut s = FakeSession {
        authenticated: true,
        ..Default::default()
    };
    guard.handle(&mut s, &params);

    assert_eq!(*seen.lock().unwrap(), Some((true, 1)));
}

// --------------------
// AuthenticatedExpirable guard
// --------------------

#[test]
fn expirable_expires_session_then_redirects() {
    let calls = Arc::new(AtomicUsize::new(0));
    let guard = PolicyHandler::authenticated_expirable(ctx(), Some(counting_fn(calls.clone())));

    // threshold 1800, inactive 2000 -> expired
    let mut s = FakeSession {
        authenticated: true,
        inactive_secs: 2000,
        ..Default::default()
    };
    let out = guard.handle(&mut s, &ParamMap::new());

    assert_eq!(out, Some(FakeResponse::RedirectTo("/login?expired=1".into())));
    assert_eq!(s.expire_calls, 1);
    // downstream rendering must observe the post-expiry session
    assert!(!s.authenticated);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn expirable_expiry_wins_over_missing_auth() {
    // Expiry is checked first: even an unauthenticated session gets the
    // expired-session redirect, not the not-authorized one.
    let guard = PolicyHandler::<FakeContext>::authenticated_expirable(ctx(), None);

    let mut s = FakeSession {
        authenticated: false,
        inactive_secs: 5000,
        ..Default::default()
    };
    let out = guard.handle(&mut s, &ParamMap::new());

    assert_eq!(out, Some(FakeResponse::RedirectTo("/login?expired=1".into())));
    assert_eq!(s.expire_calls, 1);
}

#[test]
fn expirable_fresh_session_invokes_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let guard = PolicyHandler::authenticated_expirable(ctx(), Some(counting_fn(calls.clone())));

    // threshold 1800, inactive 10 -> fresh
    let mut s = FakeSession {
        authenticated: true,
        inactive_secs: 10,
        ..Default::default()
    };
    let out = guard.handle(&mut s, &ParamMap::new());

    assert_eq!(out, Some(FakeResponse::Page("ok")));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(s.expire_calls, 0);
}

#[test]
fn expirable_fresh_but_unauthenticated_gets_not_authorized() {
    let calls = Arc::new(AtomicUsize::new(0));
    let guard = PolicyHandler::authenticated_expirable(ctx(), Some(counting_fn(calls.clone())));

    let mut s = FakeSession {
        authenticated: false,
        inactive_secs: 10,
        ..Default::default()
    };
    let out = guard.handle(&mut s, &ParamMap::new());

    assert_eq!(out, Some(FakeResponse::RedirectTo("/login".into())));
    assert_eq!(s.expire_calls, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// --------------------
// Anonymous guard
// --------------------

#[test]
fn anonymous_invokes_for_every_session_state() {
    let calls = Arc::new(AtomicUsize::new(0));
    let guard = PolicyHandler::anonymous(ctx(), Some(counting_fn(calls.clone())));

    let mut fresh = FakeSession::default();
    let mut authed = FakeSession {
        authenticated: true,
        ..Default::default()
    };
    let mut stale = FakeSession {
        inactive_secs: 999_999,
        ..Default::default()
    };

    assert_eq!(guard.handle(&mut fresh, &ParamMap::new()), Some(FakeResponse::Page("ok")));
    assert_eq!(guard.handle(&mut authed, &ParamMap::new()), Some(FakeResponse::Page("ok")));
    assert_eq!(guard.handle(&mut stale, &ParamMap::new()), Some(FakeResponse::Page("ok")));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

// --------------------
// Absent route function / eligibility
// --------------------

#[test]
fn absent_route_fn_is_a_noop_under_passing_policy() {
    let guard = PolicyHandler::<FakeContext>::anonymous(ctx(), None);
    let mut s = FakeSession::default();
    assert_eq!(guard.handle(&mut s, &ParamMap::new()), None);

    let guard = PolicyHandler::<FakeContext>::authenticated(ctx(), None);
    let mut s = FakeSession {
        authenticated: true,
        ..Default::default()
    };
    assert_eq!(guard.handle(&mut s, &ParamMap::new()), None);
}

#[test]
fn absent_route_fn_still_rejects_on_failed_policy() {
    let guard = PolicyHandler::<FakeContext>::authenticated(ctx(), None);
    let mut s = FakeSession::default();
    assert_eq!(
        guard.handle(&mut s, &ParamMap::new()),
        Some(FakeResponse::RedirectTo("/login".into()))
    );
}

#[test]
fn can_handle_defaults_to_eligible() {
    let guard = PolicyHandler::<FakeContext>::anonymous(ctx(), None);
    let s = FakeSession::default();
    assert!(guard.can_handle(&s, &ParamMap::new()));
}

#[test]
fn can_handle_honors_custom_predicate() {
    let guard = PolicyHandler::<FakeContext>::anonymous(ctx(), None)
        .with_can_handle(|s, p| s.authenticated() && p.contains_key("id"));

    let anon = FakeSession::default();
    let authed = FakeSession {
        authenticated: true,
        ..Default::default()
    };
    let mut params = ParamMap::new();
    params.insert("id".into(), serde_json::json!(1));

    assert!(!guard.can_handle(&anon, &params));
    assert!(!guard.can_handle(&authed, &ParamMap::new()));
    assert!(guard.can_handle(&authed, &params));
}
