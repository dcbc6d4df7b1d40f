//! Session history
//!
//! This module provides access to wayfinder-history: the in-memory and browser
//! history sources, the listener-based [`History`] and the shared default
//! history.

pub use wayfinder_history::*;
