//! Path utilities and link resolution
//!
//! This module provides access to wayfinder-paths: segment helpers, percent
//! encoding, location string parsing and relative path resolution.

pub use wayfinder_paths::*;
