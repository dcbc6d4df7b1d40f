//! Route registration.

use wayfinder_routes::{PatternError, RouteMatch, RoutePattern, Ranking, pick_ranked};

/// Identifies a registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(u64);

impl std::fmt::Display for RouteId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "route#{}", self.0)
	}
}

/// A registered route's payload, tagged with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<T> {
	/// Id handed out at registration.
	pub id: RouteId,
	/// The caller's payload.
	pub payload: T,
}

/// A mutable set of routes with a cached ranking.
///
/// The ranking is recomputed on every registration and unregistration, so
/// matching never re-scores the set.
#[derive(Debug, Clone)]
pub struct RouteRegistry<T> {
	patterns: Vec<RoutePattern<RouteEntry<T>>>,
	ranking: Ranking,
	next_id: u64,
}

impl<T> RouteRegistry<T> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			patterns: Vec::new(),
			ranking: Ranking::default(),
			next_id: 0,
		}
	}

	/// Registers a route.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid; see [`RouteRegistry::try_register`].
	pub fn register(&mut self, full_path: impl Into<String>, payload: T) -> RouteId {
		let full_path = full_path.into();
		match self.try_register(full_path.as_str(), payload) {
			Ok(id) => id,
			Err(e) => panic!("Invalid route pattern '{}': {}", full_path, e),
		}
	}

	/// Registers a route, rejecting invalid patterns.
	pub fn try_register(
		&mut self,
		full_path: impl Into<String>,
		payload: T,
	) -> Result<RouteId, PatternError> {
		let id = self.allocate_id();
		let pattern = RoutePattern::try_new(full_path, RouteEntry { id, payload })?;
		tracing::debug!(%id, pattern = %pattern, "route registered");
		self.insert(pattern);
		Ok(id)
	}

	/// Registers the default route, used when nothing else matches.
	pub fn register_default(&mut self, payload: T) -> RouteId {
		let id = self.allocate_id();
		tracing::debug!(%id, "default route registered");
		self.insert(RoutePattern::fallback(RouteEntry { id, payload }));
		id
	}

	/// Removes a route and returns its payload.
	pub fn unregister(&mut self, id: RouteId) -> Option<T> {
		let index = self
			.patterns
			.iter()
			.position(|pattern| pattern.payload().id == id)?;
		let removed = self.patterns.remove(index);
		self.ranking = Ranking::compute(&self.patterns);
		tracing::debug!(%id, "route unregistered");
		Some(removed.into_payload().payload)
	}

	/// Returns the pattern of a registered route.
	pub fn get(&self, id: RouteId) -> Option<&RoutePattern<RouteEntry<T>>> {
		self.patterns
			.iter()
			.find(|pattern| pattern.payload().id == id)
	}

	/// Returns the number of registered routes.
	pub fn len(&self) -> usize {
		self.patterns.len()
	}

	/// Returns whether no route is registered.
	pub fn is_empty(&self) -> bool {
		self.patterns.is_empty()
	}

	/// Iterates over the routes in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &RoutePattern<RouteEntry<T>>> {
		self.patterns.iter()
	}

	/// Picks the best route for `uri`.
	pub fn pick(&self, uri: &str) -> Option<RouteMatch<'_, RouteEntry<T>>> {
		pick_ranked(&self.patterns, &self.ranking, uri)
	}

	fn allocate_id(&mut self) -> RouteId {
		let id = RouteId(self.next_id);
		self.next_id += 1;
		id
	}

	fn insert(&mut self, pattern: RoutePattern<RouteEntry<T>>) {
		self.patterns.push(pattern);
		self.ranking = Ranking::compute(&self.patterns);
	}
}

impl<T> Default for RouteRegistry<T> {
	fn default() -> Self {
		Self::new()
	}
}
