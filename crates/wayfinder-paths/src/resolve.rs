//! Relative path resolution.
//!
//! Every path is treated as a directory, never a file, so resolution behaves
//! like `cd` on a command line rather than like a browser resolving an
//! `href`:
//!
//! | `to`          | `base`       | result           |
//! |---------------|--------------|------------------|
//! | `profile`     | `/users/789` | `/users/789/profile` |
//! | `./`          | `/users/123` | `/users/123`     |
//! | `../`         | `/users/123` | `/users`         |
//! | `../..`       | `/users/123` | `/`              |
//! | `../../one`   | `/a/b/c/d`   | `/a/b/one`       |
//! | `?a=b`        | `/users?b=c` | `/users?a=b`     |

use crate::paths::{add_query, join, segmentize, split_query, strip_slashes};

/// Resolves `to` against `base`.
///
/// Absolute targets are returned unchanged. The query of `base` is always
/// dropped; the query of `to` is carried over.
pub fn resolve(to: &str, base: &str) -> String {
	if to.starts_with('/') {
		return to.to_string();
	}

	let (to_pathname, to_query) = split_query(to);
	let (base_pathname, _) = split_query(base);
	let to_segments = segmentize(to_pathname, false);
	let base_segments = segmentize(base_pathname, false);

	if to_segments[0].is_empty() {
		return add_query(base_pathname, to_query);
	}

	if !to_segments[0].starts_with('.') {
		let pathname = base_segments
			.iter()
			.chain(to_segments.iter())
			.copied()
			.collect::<Vec<_>>()
			.join("/");
		let prefix = if base_segments == [""] { "" } else { "/" };
		return add_query(&format!("{}{}", prefix, pathname), to_query);
	}

	let mut segments: Vec<&str> = Vec::with_capacity(base_segments.len() + to_segments.len());
	for segment in base_segments.into_iter().chain(to_segments) {
		match segment {
			".." => {
				segments.pop();
			}
			"." => {}
			_ => segments.push(segment),
		}
	}

	add_query(&format!("/{}", segments.join("/")), to_query)
}

/// Resolves a link inside a routing context.
///
/// - `/` points at the root of the routing context.
/// - An absolute path is resolved from the root of the routing context.
/// - A relative path is resolved against `route_base`, the uri consumed by
///   the nearest enclosing route.
///
/// The result is prefixed with the application basepath `app_base`.
pub fn resolve_link(path: &str, route_base: &str, app_base: &str) -> String {
	let resolved = if path == "/" {
		"/".to_string()
	} else if path.starts_with('/') {
		resolve(strip_slashes(path), "/")
	} else {
		resolve(path, route_base)
	};
	join([app_base, resolved.as_str()])
}
