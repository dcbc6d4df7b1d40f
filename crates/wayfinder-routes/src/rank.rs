//! Route scoring and ranking.
//!
//! Every segment is worth [`SEGMENT_POINTS`], then adjusted by its kind.
//! A splat takes back more than a segment is worth, so a splat pattern always
//! ranks below a static or dynamic pattern of the same depth. The default
//! pattern scores `0`.

use crate::pattern::{RoutePattern, Segment};

/// Points every segment is worth.
pub const SEGMENT_POINTS: i32 = 4;
/// Bonus for a literal segment.
pub const STATIC_POINTS: i32 = 3;
/// Bonus for a dynamic segment.
pub const DYNAMIC_POINTS: i32 = 2;
/// Extra penalty (on top of the segment points) for a splat.
pub const SPLAT_PENALTY: i32 = 1;
/// Bonus for the root segment.
pub const ROOT_POINTS: i32 = 1;

/// Scores a pattern.
pub fn score<T>(pattern: &RoutePattern<T>) -> i32 {
	if pattern.is_default() {
		return 0;
	}

	pattern.segments().fold(0, |acc, segment| {
		acc + SEGMENT_POINTS
			+ match segment {
				Segment::Root => ROOT_POINTS,
				Segment::Dynamic(_) => DYNAMIC_POINTS,
				Segment::Splat(_) => -(SEGMENT_POINTS + SPLAT_PENALTY),
				Segment::Static(_) => STATIC_POINTS,
			}
	})
}

/// The rank of one pattern: its score and its registration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
	/// Score of the pattern.
	pub score: i32,
	/// Position of the pattern in the slice it was ranked from.
	pub index: usize,
}

/// Patterns ordered best first.
///
/// A ranking refers to patterns by index, so it stays valid for as long as
/// the slice it was computed from is unchanged. Recompute it whenever the
/// pattern set changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
	order: Vec<Rank>,
}

impl Ranking {
	/// Scores every pattern and sorts by descending score, breaking ties by
	/// ascending index.
	pub fn compute<T>(patterns: &[RoutePattern<T>]) -> Self {
		let mut order: Vec<Rank> = patterns
			.iter()
			.enumerate()
			.map(|(index, pattern)| Rank {
				score: score(pattern),
				index,
			})
			.collect();
		order.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));

		tracing::trace!(routes = order.len(), "ranked route patterns");
		Self { order }
	}

	/// Iterates over the ranks, best first.
	pub fn iter(&self) -> impl Iterator<Item = &Rank> {
		self.order.iter()
	}

	/// Returns the number of ranked patterns.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	/// Returns whether the ranking is empty.
	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}

/// Ranks the patterns and returns them best first together with their
/// ranks.
pub fn rank_routes<T>(patterns: &[RoutePattern<T>]) -> Vec<(Rank, &RoutePattern<T>)> {
	Ranking::compute(patterns)
		.iter()
		.map(|rank| (*rank, &patterns[rank.index]))
		.collect()
}
