//! # Wayfinder
//!
//! The core of a client-side router: route ranking and matching, path
//! utilities, link resolution and a history abstraction that drives
//! navigation either in memory or through the browser's History API.
//!
//! ## Feature Flags
//!
//! Path utilities, matching and history are always available.
//!
//! - `router` - Routing context bound to a history, the only optional part
//! - `full` (default) - All features enabled
//!
//! ## Quick Example
//!
//! ```
//! use wayfinder::prelude::*;
//!
//! let routes = vec![
//!     RoutePattern::new("/", "home"),
//!     RoutePattern::new("users/:id", "user"),
//!     RoutePattern::new("users/*", "user-files"),
//! ];
//!
//! let found = pick(&routes, "/users/42").unwrap();
//! assert_eq!(*found.payload(), "user");
//! assert_eq!(found.param("id"), Some("42"));
//!
//! assert_eq!(resolve("../settings", "/users/42"), "/users/settings");
//! ```

#![warn(missing_docs)]

pub mod history;
pub mod paths;
#[cfg(feature = "router")]
pub mod router;
pub mod routes;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
	// Matching
	pub use crate::routes::{PatternError, RouteMatch, RoutePattern, match_route, pick};

	// Paths
	pub use crate::paths::{join, parse_path, resolve, resolve_link, stringify_path};

	// History
	pub use crate::history::{
		Action, History, HistoryError, HistoryEvent, HistorySource, Location, MemorySource,
		NavigateOptions, NavigateTo, Unlisten, global_history, navigate,
	};

	// Routing context
	#[cfg(feature = "router")]
	pub use crate::router::{
		ActiveRoute, HistoryConfig, RouteChange, Router, RouterConfig, RouterContext,
		RouterError,
	};
}
