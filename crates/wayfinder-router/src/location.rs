//! Basepath handling for locations.

use crate::error::RouterError;
use wayfinder_history::Location;
use wayfinder_paths::{join, normalize_path, segmentize, strip_splat};
use wayfinder_routes::{RoutePattern, match_route};

/// Removes `basepath` from the front of `pathname`.
///
/// Fails with [`RouterError::BasepathMismatch`] when `pathname` does not start
/// with every segment of `basepath`.
pub fn strip_basepath(pathname: &str, basepath: &str) -> Result<String, RouterError> {
	let base_segments = segmentize(basepath, true);
	let path_segments = segmentize(pathname, true);

	let within = base_segments.len() <= path_segments.len()
		&& base_segments
			.iter()
			.zip(&path_segments)
			.all(|(base, path)| base == path);
	if !within {
		return Err(RouterError::BasepathMismatch {
			pathname: pathname.to_string(),
			basepath: basepath.to_string(),
		});
	}

	Ok(join(&path_segments[base_segments.len()..]))
}

/// Returns `location` with its pathname made relative to `basepath`.
/// Search, hash, state and key are kept.
pub fn normalize_location(location: &Location, basepath: &str) -> Result<Location, RouterError> {
	Ok(Location {
		pathname: strip_basepath(&location.pathname, basepath)?,
		..location.clone()
	})
}

/// Returns the part of `pathname` a route at `route_path` consumes, ignoring
/// anything a splat would capture. `Ok(None)` when the route does not match
/// the start of `pathname`; an invalid route path is an error, not a miss.
pub fn extract_base_uri(route_path: &str, pathname: &str) -> Result<Option<String>, RouterError> {
	let full_path = normalize_path(strip_splat(route_path));
	let base_len = segmentize(&full_path, true).len();
	let prefix: Vec<&str> = segmentize(pathname, true)
		.into_iter()
		.take(base_len)
		.collect();

	let pattern = RoutePattern::try_new(full_path, ())?;
	let found = match_route(&pattern, &join(prefix)).map(|found| found.uri);
	Ok(found)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn location(pathname: &str) -> Location {
		Location {
			pathname: pathname.to_string(),
			search: "?q=1".to_string(),
			hash: "#top".to_string(),
			state: None,
			key: "k".to_string(),
		}
	}

	#[rstest]
	#[case("/app/users/42", "/app", "/users/42")]
	#[case("/app", "/app", "/")]
	#[case("/app/", "app/", "/")]
	#[case("/users/42", "/", "/users/42")]
	#[case("/a/b/c", "/a/b", "/c")]
	fn test_normalize_location(#[case] pathname: &str, #[case] basepath: &str, #[case] expected: &str) {
		let normalized = normalize_location(&location(pathname), basepath).unwrap();

		assert_eq!(normalized.pathname, expected);
		assert_eq!(normalized.search, "?q=1");
		assert_eq!(normalized.hash, "#top");
		assert_eq!(normalized.key, "k");
	}

	#[rstest]
	#[case("/other/page", "/app")]
	#[case("/", "/app")]
	#[case("/application", "/app")]
	fn test_normalize_location_rejects_foreign_paths(#[case] pathname: &str, #[case] basepath: &str) {
		let result = normalize_location(&location(pathname), basepath);

		assert_eq!(
			result,
			Err(RouterError::BasepathMismatch {
				pathname: pathname.to_string(),
				basepath: basepath.to_string(),
			})
		);
	}

	#[rstest]
	#[case("blog/*", "/blog/2024/hello", Some("/blog"))]
	#[case("blog/:id/*", "/blog/42/comments", Some("/blog/42"))]
	#[case("blog/:id", "/blog/42", Some("/blog/42"))]
	#[case("/", "/anything/else", Some("/"))]
	#[case("blog/*", "/news/1", None)]
	#[case("blog/:id", "/blog", None)]
	fn test_extract_base_uri(#[case] route_path: &str, #[case] pathname: &str, #[case] expected: Option<&str>) {
		let base = extract_base_uri(route_path, pathname).unwrap();
		assert_eq!(base.as_deref(), expected);
	}

	#[rstest]
	fn test_extract_base_uri_of_deep_route() {
		let statics: Vec<String> = (0..40).map(|i| format!("s{}", i)).collect();
		let route_path = format!("{}/*", statics.join("/"));
		let pathname = format!("/{}/tail/end", statics.join("/"));

		let base = extract_base_uri(&route_path, &pathname).unwrap();

		assert_eq!(base, Some(format!("/{}", statics.join("/"))));
	}
}
