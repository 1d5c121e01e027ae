use std::time::{Duration, Instant};

use routeguard_core::Session;

/// One caller's session as tracked by this gateway.
///
/// Expiry is sliding: `last_active` is refreshed (`touch`) after each
/// accepted request, so the configured threshold measures inactivity, not
/// session age. `expire()` latches: once tripped, `is_expired` stays true
/// no matter what the clock says afterwards.
#[derive(Debug, Clone)]
pub struct HttpSession {
    pub session_id: String,
    pub user: Option<String>,
    pub authenticated: bool,
    pub last_active: Instant,
    pub expired: bool,
}

impl HttpSession {
    /// Fresh unauthenticated session, e.g. for a caller with no cookie.
    pub fn anonymous(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            user: None,
            authenticated: false,
            last_active: Instant::now(),
            expired: false,
        }
    }

    /// Session already bound to a verified identity.
    pub fn authenticated_as(session_id: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            user: Some(user.into()),
            authenticated: true,
            last_active: Instant::now(),
            expired: false,
        }
    }

    /// Sliding refresh after an accepted request.
    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    /// Backdate `last_active`, saturating at process start. Test hook for
    /// expiry arithmetic without sleeping.
    pub fn backdate(&mut self, by: Duration) {
        if let Some(t) = self.last_active.checked_sub(by) {
            self.last_active = t;
        }
    }
}

impl Session for HttpSession {
    fn authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_expired(&self, threshold_secs: u64) -> bool {
        self.expired || self.last_active.elapsed() > Duration::from_secs(threshold_secs)
    }

    fn expire(&mut self) {
        self.expired = true;
        self.authenticated = false;
    }
}
