//! Route patterns.

use crate::error::PatternError;
use wayfinder_paths::{dynamic_name, is_splat, segmentize, splat_name};

/// The kind of a single pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
	/// The empty root segment.
	Root,
	/// A literal segment that must match exactly.
	Static(&'a str),
	/// `:name`, binds one segment to `name`.
	Dynamic(&'a str),
	/// `*` or `*name`, binds the remaining segments. Holds the capture key.
	Splat(&'a str),
}

impl<'a> Segment<'a> {
	/// Classifies a raw pattern segment.
	pub fn classify(segment: &'a str) -> Self {
		if segment.is_empty() {
			Self::Root
		} else if let Some(name) = dynamic_name(segment) {
			Self::Dynamic(name)
		} else if is_splat(segment) {
			Self::Splat(splat_name(segment))
		} else {
			Self::Static(segment)
		}
	}
}

/// A route pattern with an opaque payload.
///
/// The payload (a component, a view factory, route metadata...) plays no
/// part in matching and is handed back untouched with every match.
#[derive(Debug, Clone)]
pub struct RoutePattern<T = ()> {
	full_path: String,
	is_default: bool,
	payload: T,
}

impl<T> RoutePattern<T> {
	/// Creates a pattern.
	///
	/// # Panics
	///
	/// Panics if the pattern is rejected by [`RoutePattern::try_new`].
	pub fn new(full_path: impl Into<String>, payload: T) -> Self {
		let full_path = full_path.into();
		match Self::try_new(full_path.as_str(), payload) {
			Ok(pattern) => pattern,
			Err(e) => panic!("Invalid route pattern '{}': {}", full_path, e),
		}
	}

	/// Creates a pattern, rejecting patterns that continue after a splat.
	pub fn try_new(full_path: impl Into<String>, payload: T) -> Result<Self, PatternError> {
		let full_path = full_path.into();
		validate(&full_path)?;
		Ok(Self {
			full_path,
			is_default: false,
			payload,
		})
	}

	/// Creates the default (fallback) pattern.
	pub fn fallback(payload: T) -> Self {
		Self {
			full_path: String::new(),
			is_default: true,
			payload,
		}
	}

	/// Returns the full pattern string.
	pub fn full_path(&self) -> &str {
		&self.full_path
	}

	/// Returns whether this is the default pattern.
	pub fn is_default(&self) -> bool {
		self.is_default
	}

	/// Returns the payload.
	pub fn payload(&self) -> &T {
		&self.payload
	}

	/// Consumes the pattern and returns its payload.
	pub fn into_payload(self) -> T {
		self.payload
	}

	/// Returns the classified segments of the pattern.
	pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
		segmentize(&self.full_path, false)
			.into_iter()
			.map(Segment::classify)
	}

	/// Returns the names of the parameters this pattern can bind, in order.
	pub fn param_names(&self) -> Vec<&str> {
		self.segments()
			.filter_map(|segment| match segment {
				Segment::Dynamic(name) | Segment::Splat(name) => Some(name),
				_ => None,
			})
			.collect()
	}
}

impl RoutePattern<()> {
	/// Creates a pattern without payload.
	pub fn path(full_path: impl Into<String>) -> Self {
		Self::new(full_path, ())
	}
}

impl<T> std::fmt::Display for RoutePattern<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_default {
			write!(f, "<default>")
		} else {
			write!(f, "{}", self.full_path)
		}
	}
}

fn validate(full_path: &str) -> Result<(), PatternError> {
	let segments = segmentize(full_path, false);
	let last = segments.len() - 1;
	if let Some(segment) = segments[..last].iter().find(|segment| is_splat(segment)) {
		return Err(PatternError::SplatNotLast {
			pattern: full_path.to_string(),
			segment: segment.to_string(),
		});
	}

	Ok(())
}
