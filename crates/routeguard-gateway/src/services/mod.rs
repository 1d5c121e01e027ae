//! Built-in page services.
//!
//! These are the wrapped route functions the guards invoke once policy has
//! passed. Real deployments register their own; the built-ins exist so a
//! config-only setup serves something observable.

pub mod pages;

pub use pages::register_builtins;
