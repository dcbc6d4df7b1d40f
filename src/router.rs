//! Routing context bound to a history
//!
//! This module provides access to wayfinder-router: route registration,
//! basepath handling, nested routers and the render hook.

pub use wayfinder_router::*;
