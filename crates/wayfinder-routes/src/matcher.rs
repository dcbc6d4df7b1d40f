//! Picking the best route for a URI.

use crate::pattern::{RoutePattern, Segment};
use crate::rank::Ranking;
use std::collections::HashMap;
use wayfinder_paths::{decode_segment, join, segmentize, split_query};

/// A pattern matched against a URI, with the parameters it bound.
#[derive(Debug)]
pub struct RouteMatch<'a, T = ()> {
	/// The matched pattern.
	pub pattern: &'a RoutePattern<T>,
	/// Percent-decoded parameters, keyed by parameter name (`*` for an
	/// anonymous splat).
	pub params: HashMap<String, String>,
	/// The part of the URI the pattern consumed, with a leading slash and no
	/// trailing slash. For the default pattern this is the whole input.
	pub uri: String,
}

impl<'a, T> RouteMatch<'a, T> {
	/// Returns the payload of the matched pattern.
	pub fn payload(&self) -> &'a T {
		self.pattern.payload()
	}

	/// Returns a bound parameter.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}

	/// Returns whether the default pattern was used.
	pub fn is_default(&self) -> bool {
		self.pattern.is_default()
	}
}

impl<T> Clone for RouteMatch<'_, T> {
	fn clone(&self) -> Self {
		Self {
			pattern: self.pattern,
			params: self.params.clone(),
			uri: self.uri.clone(),
		}
	}
}

/// Picks the best matching pattern for `uri`.
///
/// Patterns are ranked first, so the result is independent of the order of
/// `patterns` except for exact score ties. Returns the first default pattern
/// when nothing else matches, and `None` when there is no default either.
pub fn pick<'a, T>(patterns: &'a [RoutePattern<T>], uri: &str) -> Option<RouteMatch<'a, T>> {
	pick_ranked(patterns, &Ranking::compute(patterns), uri)
}

/// Like [`pick`], with a ranking computed beforehand.
///
/// `ranking` must have been computed from `patterns`.
pub fn pick_ranked<'a, T>(
	patterns: &'a [RoutePattern<T>],
	ranking: &Ranking,
	uri: &str,
) -> Option<RouteMatch<'a, T>> {
	let (pathname, _) = split_query(uri);
	let uri_segments = segmentize(pathname, false);
	let is_root_uri = uri_segments.first().is_some_and(|segment| segment.is_empty());

	let mut default_match = None;

	for rank in ranking.iter() {
		let Some(pattern) = patterns.get(rank.index) else {
			continue;
		};

		if pattern.is_default() {
			if default_match.is_none() {
				default_match = Some(RouteMatch {
					pattern,
					params: HashMap::new(),
					uri: uri.to_string(),
				});
			}
			continue;
		}

		if let Some((params, consumed)) = walk(pattern, &uri_segments, is_root_uri) {
			tracing::trace!(pattern = %pattern, uri, "route matched");
			return Some(RouteMatch {
				pattern,
				params,
				uri: join(&uri_segments[..consumed]),
			});
		}
	}

	if default_match.is_some() {
		tracing::trace!(uri, "falling back to default route");
	}
	default_match
}

/// Matches a single pattern against `uri`.
pub fn match_route<'a, T>(pattern: &'a RoutePattern<T>, uri: &str) -> Option<RouteMatch<'a, T>> {
	pick(std::slice::from_ref(pattern), uri)
}

/// Walks pattern and URI segments in lockstep. On success returns the bound
/// parameters and the number of URI segments consumed.
fn walk<T>(
	pattern: &RoutePattern<T>,
	uri_segments: &[&str],
	is_root_uri: bool,
) -> Option<(HashMap<String, String>, usize)> {
	let pattern_segments = segmentize(pattern.full_path(), false);
	let max = uri_segments.len().max(pattern_segments.len());
	let mut params = HashMap::new();
	let mut index = 0;

	while index < max {
		let pattern_segment = pattern_segments.get(index).copied();

		if let Some(raw) = pattern_segment
			&& let Segment::Splat(name) = Segment::classify(raw)
		{
			let rest: Vec<String> = uri_segments
				.get(index..)
				.unwrap_or(&[])
				.iter()
				.map(|segment| decode_segment(segment))
				.collect();
			params.insert(name.to_string(), rest.join("/"));
			break;
		}

		let uri_segment = uri_segments.get(index)?;
		let pattern_segment = pattern_segment?;

		match Segment::classify(pattern_segment) {
			Segment::Dynamic(name) if !is_root_uri => {
				params.insert(name.to_string(), decode_segment(uri_segment));
			}
			_ if pattern_segment == *uri_segment => {}
			_ => return None,
		}

		index += 1;
	}

	Some((params, index))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/users/42", Some(("/users/42", "42")))]
	#[case("/users/42/", Some(("/users/42", "42")))]
	#[case("/users/j%C3%BCrgen", Some(("/users/j%C3%BCrgen", "jürgen")))]
	#[case("/users", None)]
	#[case("/users/42/posts", None)]
	fn test_match_route_dynamic(#[case] uri: &str, #[case] expected: Option<(&str, &str)>) {
		let pattern = RoutePattern::path("/users/:id");

		let found = match_route(&pattern, uri);

		match expected {
			Some((matched_uri, id)) => {
				let found = found.unwrap();
				assert_eq!(found.uri, matched_uri);
				assert_eq!(found.param("id"), Some(id));
			}
			None => assert!(found.is_none()),
		}
	}

	#[rstest]
	fn test_root_uri_does_not_bind_dynamic() {
		let patterns = vec![RoutePattern::new("/", "root"), RoutePattern::new(":foo", "foo")];

		let found = pick(&patterns, "/").unwrap();

		assert_eq!(*found.payload(), "root");
		assert!(found.params.is_empty());
		assert_eq!(found.uri, "/");
	}

	#[rstest]
	fn test_splat_consumes_zero_segments() {
		let pattern = RoutePattern::path("/files/*");
		let found = match_route(&pattern, "/files").unwrap();
		assert_eq!(found.param("*"), Some(""));
		assert_eq!(found.uri, "/files");
	}

	#[rstest]
	fn test_splat_decodes_each_segment() {
		let pattern = RoutePattern::path("/files/*path");
		let found = match_route(&pattern, "/files/a%20b/c%2Fd").unwrap();
		assert_eq!(found.param("path"), Some("a b/c/d"));
	}

	#[rstest]
	fn test_query_is_ignored() {
		let pattern = RoutePattern::path("/search");
		let found = match_route(&pattern, "/search?q=rust").unwrap();
		assert_eq!(found.uri, "/search");
	}

	#[rstest]
	fn test_first_default_wins() {
		let patterns = vec![
			RoutePattern::fallback("first"),
			RoutePattern::fallback("second"),
			RoutePattern::new("/home", "home"),
		];

		let found = pick(&patterns, "/no/where").unwrap();

		assert!(found.is_default());
		assert_eq!(*found.payload(), "first");
		assert_eq!(found.uri, "/no/where");
	}

	#[rstest]
	fn test_no_match_without_default() {
		let patterns = vec![RoutePattern::path("/home")];
		assert!(pick(&patterns, "/away").is_none());
	}

	#[rstest]
	fn test_pick_ranked_reuses_ranking() {
		let patterns = vec![
			RoutePattern::new("/groups/:id", 1),
			RoutePattern::new("/groups/main", 2),
		];
		let ranking = Ranking::compute(&patterns);

		let main = pick_ranked(&patterns, &ranking, "/groups/main").unwrap();
		let other = pick_ranked(&patterns, &ranking, "/groups/7").unwrap();

		assert_eq!(*main.payload(), 2);
		assert_eq!(*other.payload(), 1);
	}
}
