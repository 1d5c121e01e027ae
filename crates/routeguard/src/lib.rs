//! Top-level facade crate for RouteGuard.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use routeguard_core::*;
}

pub mod gateway {
    pub use routeguard_gateway::*;
}
