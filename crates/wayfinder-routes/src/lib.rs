//! # Wayfinder Routes
//!
//! Route ranking and matching. Patterns are scored by the shape of their
//! segments so that, at equal depth,
//!
//! ```text
//! static > dynamic > splat > root
//! ```
//!
//! and the best match for a URI never depends on declaration order (except
//! to break exact score ties, where the first declared pattern wins).
//!
//! ## Pattern Syntax
//!
//! - `/users` - literal segments
//! - `/users/:id` - dynamic segment, binds exactly one segment to `id`
//! - `/files/*` or `/files/*path` - splat, binds the remaining segments to
//!   `*` or `path`
//! - [`RoutePattern::fallback`] - default pattern, used only when nothing
//!   else matches
//!
//! ## Example
//!
//! ```
//! use wayfinder_routes::{RoutePattern, pick};
//!
//! let routes = vec![
//!     RoutePattern::new("/groups/:id", "group"),
//!     RoutePattern::new("/groups/main", "main"),
//!     RoutePattern::fallback("not-found"),
//! ];
//!
//! let found = pick(&routes, "/groups/main").unwrap();
//! assert_eq!(*found.payload(), "main");
//!
//! let found = pick(&routes, "/groups/42?tab=members").unwrap();
//! assert_eq!(found.params.get("id").map(String::as_str), Some("42"));
//! assert_eq!(found.uri, "/groups/42");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod rank;

pub use error::PatternError;
pub use matcher::{RouteMatch, match_route, pick, pick_ranked};
pub use pattern::{RoutePattern, Segment};
pub use rank::{Rank, Ranking, rank_routes, score};
