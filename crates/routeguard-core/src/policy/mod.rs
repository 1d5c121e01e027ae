//! Policy layer (route guards and their dispatcher-context seam).
//!
//! A [`PolicyHandler`] wraps an optional route function behind one of three
//! access policies and resolves rejections into redirects through the
//! injected [`DispatcherContext`].

pub mod context;
pub mod handler;

pub use context::DispatcherContext;
pub use handler::{ParamMap, Policy, PolicyHandler, RouteFn};
