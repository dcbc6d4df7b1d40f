//! Segment-level path helpers.
//!
//! Paths are treated as `/`-delimited segment lists. A pattern segment is
//! either a literal, a dynamic parameter (`:name`), a splat (`*` or `*name`)
//! or the empty root segment.

/// Removes every leading and trailing `/`.
pub fn strip_slashes(s: &str) -> &str {
	s.trim_matches('/')
}

/// Splits a URI into its `/`-delimited segments after stripping the outer
/// slashes.
///
/// The root (`"/"` or `""`) yields a single empty segment unless
/// `filter_empty` is set, in which case empty segments (including the ones
/// produced by doubled slashes) are dropped.
pub fn segmentize(uri: &str, filter_empty: bool) -> Vec<&str> {
	let segments = strip_slashes(uri).split('/');
	if filter_empty {
		segments.filter(|segment| !segment.is_empty()).collect()
	} else {
		segments.collect()
	}
}

/// Returns `true` for the empty root segment.
pub fn is_root_segment(segment: &str) -> bool {
	segment.is_empty()
}

/// Returns `true` for a dynamic segment such as `:id`.
pub fn is_dynamic(segment: &str) -> bool {
	dynamic_name(segment).is_some()
}

/// Returns the parameter name of a dynamic segment (`:id` -> `id`).
pub fn dynamic_name(segment: &str) -> Option<&str> {
	segment.strip_prefix(':').filter(|name| !name.is_empty())
}

/// Returns `true` for a splat segment (`*` or `*name`).
pub fn is_splat(segment: &str) -> bool {
	segment.starts_with('*')
}

/// Returns the key a splat segment captures under: `*` for an anonymous splat,
/// the name otherwise.
pub fn splat_name(segment: &str) -> &str {
	match segment {
		"*" => "*",
		named => named.strip_prefix('*').unwrap_or(named),
	}
}

/// Cuts a trailing splat (and its name) off a path pattern.
///
/// `/files/*rest` becomes `/files/`.
pub fn strip_splat(path: &str) -> &str {
	match path.find('*') {
		Some(index) => &path[..index],
		None => path,
	}
}

/// Normalizes a path to a single leading slash and no trailing slash.
///
/// `base/path/` becomes `/base/path`.
pub fn normalize_path(path: &str) -> String {
	format!("/{}", strip_slashes(path))
}

/// Joins path fragments into one normalized path.
///
/// Empty segments are dropped, so doubled slashes collapse and the result
/// always has exactly one leading slash and no trailing slash. Joining an
/// already joined path again returns it unchanged.
pub fn join<I, S>(fragments: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut joined = String::from("/");
	for fragment in fragments {
		for segment in segmentize(fragment.as_ref(), true) {
			if joined.len() > 1 {
				joined.push('/');
			}
			joined.push_str(segment);
		}
	}
	joined
}

/// Combines a router basepath and a route's own path into the route's full
/// pattern.
///
/// The result has no leading slash and exactly one trailing slash:
/// `combine_paths("/base", "/path")` is `base/path/`.
pub fn combine_paths(basepath: &str, path: &str) -> String {
	let bare = if path == "/" {
		basepath.to_string()
	} else {
		format!("{}/{}", strip_slashes(basepath), strip_slashes(path))
	};
	format!("{}/", strip_slashes(&bare))
}

/// Splits a URI at its first `?` into the pathname and the query (without the
/// `?`).
pub fn split_query(uri: &str) -> (&str, Option<&str>) {
	match uri.split_once('?') {
		Some((pathname, query)) => (pathname, Some(query)),
		None => (uri, None),
	}
}

/// Appends `?query` to the pathname when a non-empty query is given.
pub fn add_query(pathname: &str, query: Option<&str>) -> String {
	match query {
		Some(query) if !query.is_empty() => format!("{}?{}", pathname, query),
		_ => pathname.to_string(),
	}
}

/// The pathname, search and hash parts of a path string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathParts {
	/// Pathname, never empty (`/` at least).
	pub pathname: String,
	/// `""` or a string starting with `?`.
	pub search: String,
	/// `""` or a string starting with `#`.
	pub hash: String,
}

/// Parses `/search?q=falafel#result-3` into its pathname, search and hash.
///
/// A lone `?` or `#` is treated as absent and an empty pathname becomes `/`.
pub fn parse_path(path: &str) -> PathParts {
	let (pathname_and_search, hash) = match path.find('#') {
		Some(index) => (&path[..index], non_empty_fragment(&path[index..])),
		None => (path, ""),
	};
	let (pathname, search) = match pathname_and_search.find('?') {
		Some(index) => (
			&pathname_and_search[..index],
			non_empty_fragment(&pathname_and_search[index..]),
		),
		None => (pathname_and_search, ""),
	};

	PathParts {
		pathname: if pathname.is_empty() { "/" } else { pathname }.to_string(),
		search: search.to_string(),
		hash: hash.to_string(),
	}
}

/// Joins pathname, search and hash back into one path string.
pub fn stringify_path(parts: &PathParts) -> String {
	format!("{}{}{}", parts.pathname, parts.search, parts.hash)
}

fn non_empty_fragment(fragment: &str) -> &str {
	if fragment.len() == 1 { "" } else { fragment }
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/users/42/", "users/42")]
	#[case("///", "")]
	#[case("plain", "plain")]
	#[case("//a//b//", "a//b")]
	fn test_strip_slashes(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(strip_slashes(input), expected);
	}

	#[rstest]
	fn test_segmentize_keeps_root_segment() {
		assert_eq!(segmentize("/", false), vec![""]);
		assert_eq!(segmentize("/users/42", false), vec!["users", "42"]);
		assert_eq!(segmentize("/a//b", false), vec!["a", "", "b"]);
	}

	#[rstest]
	fn test_segmentize_filters_empty() {
		assert!(segmentize("/", true).is_empty());
		assert_eq!(segmentize("/a//b/", true), vec!["a", "b"]);
	}

	#[rstest]
	#[case(":id", true)]
	#[case(":", false)]
	#[case("id", false)]
	#[case("*", false)]
	fn test_is_dynamic(#[case] segment: &str, #[case] expected: bool) {
		assert_eq!(is_dynamic(segment), expected);
	}

	#[rstest]
	fn test_segment_kinds() {
		assert!(is_root_segment(""));
		assert!(!is_root_segment("users"));
		assert!(is_splat("*"));
		assert!(is_splat("*rest"));
		assert!(!is_splat("rest*"));
		assert_eq!(dynamic_name(":userId"), Some("userId"));
		assert_eq!(splat_name("*"), "*");
		assert_eq!(splat_name("*rest"), "rest");
	}

	#[rstest]
	fn test_strip_splat() {
		assert_eq!(strip_splat("/files/*"), "/files/");
		assert_eq!(strip_splat("/files/*rest"), "/files/");
		assert_eq!(strip_splat("/files"), "/files");
	}

	#[rstest]
	#[case("base/path/", "/base/path")]
	#[case("", "/")]
	#[case("/", "/")]
	fn test_normalize_path(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(normalize_path(input), expected);
	}

	#[rstest]
	fn test_join() {
		assert_eq!(join(["/base", "path"]), "/base/path");
		assert_eq!(join(["/base/", "/nested//deep/"]), "/base/nested/deep");
		assert_eq!(join(["/", "/"]), "/");
		assert_eq!(join(Vec::<String>::new()), "/");
	}

	#[rstest]
	#[case("/base", "/", "base/")]
	#[case("/base", "/path", "base/path/")]
	#[case("/base/path", "/next/path/to/somewhere", "base/path/next/path/to/somewhere/")]
	#[case("/base/", "/path/", "base/path/")]
	#[case("/", "/", "/")]
	fn test_combine_paths(#[case] basepath: &str, #[case] path: &str, #[case] expected: &str) {
		assert_eq!(combine_paths(basepath, path), expected);
	}

	#[rstest]
	fn test_add_query() {
		assert_eq!(add_query("/users", Some("page=2")), "/users?page=2");
		assert_eq!(add_query("/users", Some("")), "/users");
		assert_eq!(add_query("/users", None), "/users");
	}

	#[rstest]
	fn test_split_query() {
		assert_eq!(split_query("/a?b=c"), ("/a", Some("b=c")));
		assert_eq!(split_query("/a"), ("/a", None));
	}

	#[rstest]
	#[case("/search?q=falafel#result-3", "/search", "?q=falafel", "#result-3")]
	#[case("/path?search", "/path", "?search", "")]
	#[case("/path#hash", "/path", "", "#hash")]
	#[case("/path?#hash", "/path", "", "#hash")]
	#[case("/path?search#", "/path", "?search", "")]
	#[case("?only", "/", "?only", "")]
	#[case("/path#frag?not-search", "/path", "", "#frag?not-search")]
	fn test_parse_path(
		#[case] input: &str,
		#[case] pathname: &str,
		#[case] search: &str,
		#[case] hash: &str,
	) {
		let parts = parse_path(input);
		assert_eq!(parts.pathname, pathname);
		assert_eq!(parts.search, search);
		assert_eq!(parts.hash, hash);
	}

	#[rstest]
	fn test_stringify_path() {
		let parts = parse_path("/search?q=falafel#result-3");
		assert_eq!(stringify_path(&parts), "/search?q=falafel#result-3");
	}
}
