//! Error types for route patterns.

/// Error returned when a route pattern is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
	/// A splat is followed by further segments, which could never be reached.
	#[error("Splat segment '{segment}' must be the last segment of pattern '{pattern}'")]
	SplatNotLast {
		/// The offending pattern.
		pattern: String,
		/// The splat segment.
		segment: String,
	},
}
