//! Route ranking and matching
//!
//! This module provides access to wayfinder-routes, the pure matching engine:
//! route patterns, specificity scores and best-match selection.

pub use wayfinder_routes::*;
