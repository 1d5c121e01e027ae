use async_trait::async_trait;
use dashmap::DashMap;

use super::HttpSession;

/// Pluggable session storage seam.
///
/// The router works on an owned copy per request: `load`, let the guard
/// read/mutate it, `store` it back. Per-session write serialization across
/// racing requests is the backend's concern, not the guards'.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, token: &str) -> Option<HttpSession>;
    async fn store(&self, token: &str, session: HttpSession);
    async fn remove(&self, token: &str) -> bool;
}

/// In-process store: `token -> HttpSession`.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, HttpSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, token: &str) -> Option<HttpSession> {
        self.sessions.get(token).map(|r| r.value().clone())
    }

    async fn store(&self, token: &str, session: HttpSession) {
        self.sessions.insert(token.to_string(), session);
    }

    async fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}
