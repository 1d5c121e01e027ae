//! HTTP session state and storage.
//!
//! Realizes the session collaborator the guards consume: a concrete session
//! type with sliding inactivity expiry, and a pluggable store seam with an
//! in-memory implementation. Issuance (login/logout, cookie minting) is out
//! of scope and belongs to whichever service fronts this gateway.

pub mod http;
pub mod store;

pub use http::HttpSession;
pub use store::{MemorySessionStore, SessionStore};
