//! # Wayfinder Paths
//!
//! Pure, stateless path handling shared by the matching engine, the history
//! sources and link resolution:
//!
//! - [`paths`]: segment parsing, slash normalization, splat/param detection,
//!   joining and splitting of path strings
//! - [`encoding`]: percent-encoding normalization of pathnames and decoding of
//!   captured segments
//! - [`resolve`]: `cd`-style relative resolution and link resolution against
//!   nested routing contexts
//!
//! ## Example
//!
//! ```
//! use wayfinder_paths::{join, resolve, resolve_link};
//!
//! assert_eq!(join(["/base/", "nested//path/"]), "/base/nested/path");
//! assert_eq!(resolve("../settings", "/users/42"), "/users/settings");
//! assert_eq!(resolve_link("relative", "/currentBase", "/"), "/currentBase/relative");
//! ```

#![warn(missing_docs)]

pub mod encoding;
pub mod paths;
pub mod resolve;

pub use encoding::{decode_segment, decode_uri, encode_uri, normalize_pathname};
pub use paths::{
	PathParts, add_query, combine_paths, dynamic_name, is_dynamic, is_root_segment, is_splat,
	join, normalize_path, parse_path, segmentize, split_query, splat_name, strip_slashes,
	strip_splat, stringify_path,
};
pub use resolve::{resolve, resolve_link};
