//! Axum router wiring (guarded HTTP routes).
//!
//! Responsibilities per request:
//! - Read the session cookie and load (or synthesize) the session
//! - Build the ParamMap from extracted path params
//! - Select the first eligible guard for the matched route and run it
//! - Map the guard's outcome: response forwarded verbatim, no-op -> 204
//!
//! Pattern matching itself is axum's; the table is keyed by the configured
//! route path, which is also the axum route we mount.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use routeguard_core::ParamMap;

use crate::app_state::AppState;
use crate::ops;
use crate::session::{HttpSession, SessionStore};

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new().route("/healthz", get(ops::healthz));

    for path in state.table().paths() {
        let table_key = path.clone();
        app = app.route(
            &path,
            get(
                move |st: State<AppState>,
                      Path(raw): Path<HashMap<String, String>>,
                      headers: HeaderMap| {
                    let table_key = table_key.clone();
                    async move { handle_guarded(st.0, table_key, raw, headers).await }
                },
            ),
        );
    }

    app.with_state(state)
}

/// Pull the session token out of the Cookie header, if any.
fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|kv| {
        let (k, v) = kv.trim().split_once('=')?;
        (k == cookie_name).then(|| v.to_string())
    })
}

async fn handle_guarded(
    app: AppState,
    route_path: String,
    raw_params: HashMap<String, String>,
    headers: HeaderMap,
) -> Response {
    let params: ParamMap = raw_params
        .into_iter()
        .map(|(k, v)| (k, serde_json::Value::String(v)))
        .collect();

    let store = app.sessions();
    let token = session_token(&headers, &app.cfg().session.cookie_name);

    // Unknown or missing token: ephemeral anonymous session, never persisted.
    // Cookie issuance belongs to the service fronting this gateway.
    let (mut session, persist_token) = match &token {
        Some(t) => match store.load(t).await {
            Some(s) => (s, Some(t.clone())),
            None => (HttpSession::anonymous("anon"), None),
        },
        None => (HttpSession::anonymous("anon"), None),
    };

    let Some(route) = app.table().select(&route_path, &session, &params) else {
        tracing::debug!(path = %route_path, "no eligible guard for route");
        return StatusCode::NOT_FOUND.into_response();
    };

    tracing::debug!(
        path = %route_path,
        policy = route.handler.policy().as_str(),
        session = %session.session_id,
        "dispatching guarded route"
    );

    let out = route.handler.handle(&mut session, &params);

    // Persist guard-side mutation (expire) and slide the inactivity window
    // for live sessions.
    if let Some(t) = persist_token {
        if !session.expired {
            session.touch();
        }
        store.store(&t, session).await;
    }

    match out {
        Some(resp) => resp,
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
