use serde::Deserialize;

use routeguard_core::error::{Result, RouteGuardError};
use routeguard_core::Policy;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub session: SessionSection,

    #[serde(default)]
    pub error_paths: ErrorPathsSection,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RouteGuardError::UnsupportedVersion);
        }
        if self.routes.is_empty() {
            return Err(RouteGuardError::InvalidConfig(
                "routes must not be empty".into(),
            ));
        }

        self.session.validate()?;
        self.error_paths.validate()?;

        let mut seen = std::collections::HashSet::new();
        for r in &self.routes {
            if !r.path.starts_with('/') {
                return Err(RouteGuardError::InvalidConfig(format!(
                    "route path must start with '/': {}",
                    r.path
                )));
            }
            if !seen.insert(r.path.as_str()) {
                return Err(RouteGuardError::InvalidConfig(format!(
                    "duplicate route path: {}",
                    r.path
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    /// Seconds of inactivity before an authenticated session is expired.
    #[serde(default = "default_expiration_secs")]
    pub expiration_time_seconds: u64,

    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            expiration_time_seconds: default_expiration_secs(),
            cookie_name: default_cookie_name(),
        }
    }
}

impl SessionSection {
    pub fn validate(&self) -> Result<()> {
        // 1 minute .. 30 days
        if !(60..=2_592_000).contains(&self.expiration_time_seconds) {
            return Err(RouteGuardError::InvalidConfig(
                "session.expiration_time_seconds must be between 60 and 2592000".into(),
            ));
        }
        if self.cookie_name.is_empty() {
            return Err(RouteGuardError::InvalidConfig(
                "session.cookie_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorPathsSection {
    #[serde(default = "default_not_authorized_path")]
    pub not_authorized: String,

    #[serde(default = "default_expired_session_path")]
    pub expired_session: String,
}

impl Default for ErrorPathsSection {
    fn default() -> Self {
        Self {
            not_authorized: default_not_authorized_path(),
            expired_session: default_expired_session_path(),
        }
    }
}

impl ErrorPathsSection {
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("not_authorized", &self.not_authorized),
            ("expired_session", &self.expired_session),
        ] {
            if !p.starts_with('/') {
                return Err(RouteGuardError::InvalidConfig(format!(
                    "error_paths.{name} must start with '/'"
                )));
            }
        }
        Ok(())
    }
}

/// One guarded route: path, access policy, and an optional built-in
/// handler name resolved from the service registry at boot.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    pub path: String,
    pub policy: PolicyKind,
    #[serde(default)]
    pub handler: Option<String>,
}

/// Config-level spelling of the core policy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Anonymous,
    Authenticated,
    AuthenticatedExpirable,
}

impl PolicyKind {
    pub fn to_policy(self) -> Policy {
        match self {
            PolicyKind::Anonymous => Policy::Anonymous,
            PolicyKind::Authenticated => Policy::Authenticated,
            PolicyKind::AuthenticatedExpirable => Policy::AuthenticatedExpirable,
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_expiration_secs() -> u64 {
    1800
}
fn default_cookie_name() -> String {
    "rgsid".into()
}
fn default_not_authorized_path() -> String {
    "/login".into()
}
fn default_expired_session_path() -> String {
    "/login?expired=1".into()
}
