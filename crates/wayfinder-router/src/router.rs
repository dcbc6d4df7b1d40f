//! Core Router Implementation.
//!
//! A [`Router`] binds a route registry to a [`History`] under a basepath. It
//! matches the current location against its routes, resolves links from its
//! [`RouterContext`], and calls a render hook with the active route whenever
//! the location changes.
//!
//! Nested routers share their parent's history and basepath. Their route
//! patterns are prefixed with the parent route's pattern and their links
//! resolve from the uri the parent route consumed.

use crate::context::RouterContext;
use crate::error::RouterError;
use crate::location::{extract_base_uri, normalize_location, strip_basepath};
use crate::registry::{RouteEntry, RouteId, RouteRegistry};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wayfinder_history::{
	Action, History, HistorySource, Location, NavigateOptions, NavigateTo, Unlisten,
};
use wayfinder_paths::{combine_paths, normalize_path, strip_splat};
use wayfinder_routes::{RouteMatch, RoutePattern, match_route};

/// A snapshot of the matched route.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRoute<T> {
	/// Id of the matched route.
	pub id: RouteId,
	/// Full pattern of the route, empty for the default route.
	pub path: String,
	/// Whether the default route was used.
	pub is_default: bool,
	/// The route's payload.
	pub payload: T,
	/// Bound parameters.
	pub params: HashMap<String, String>,
	/// Part of the location the route consumed, relative to the basepath.
	pub uri: String,
}

impl<T: Clone> ActiveRoute<T> {
	fn from_match(found: RouteMatch<'_, RouteEntry<T>>) -> Self {
		let entry = found.payload();
		Self {
			id: entry.id,
			path: found.pattern.full_path().to_string(),
			is_default: found.pattern.is_default(),
			payload: entry.payload.clone(),
			params: found.params,
			uri: found.uri,
		}
	}
}

impl<T> ActiveRoute<T> {
	/// Returns a bound parameter.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name).map(String::as_str)
	}
}

/// Parameters and consumed uri of an ad hoc match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
	/// Bound parameters.
	pub params: HashMap<String, String>,
	/// Consumed part of the location, relative to the basepath.
	pub uri: String,
}

/// What the render hook receives.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteChange<T> {
	/// The raw location.
	pub location: Location,
	/// How it was reached; `None` for the call made by [`Router::start`].
	pub action: Option<Action>,
	/// The route to render. `Ok(None)` when nothing matched; an error when the
	/// location lies outside the basepath.
	pub route: Result<Option<ActiveRoute<T>>, RouterError>,
}

struct RouterInner<T, S> {
	history: History<S>,
	basepath: String,
	context: RouterContext,
	route_base: String,
	registry: RefCell<RouteRegistry<T>>,
}

/// A routing context bound to a history.
///
/// Cloning yields another handle to the same router.
pub struct Router<T, S = Box<dyn HistorySource>> {
	inner: Rc<RouterInner<T, S>>,
}

impl<T, S> Clone for Router<T, S> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T, S: HistorySource> Router<T, S> {
	/// Creates a router served at `/`.
	pub fn new(history: History<S>) -> Self {
		Self::with_basepath(history, "/")
	}

	/// Creates a router for an application served under `basepath`.
	pub fn with_basepath(history: History<S>, basepath: &str) -> Self {
		let basepath = normalize_path(basepath);
		Self {
			inner: Rc::new(RouterInner {
				history,
				context: RouterContext::new(&basepath),
				basepath,
				route_base: "/".to_string(),
				registry: RefCell::new(RouteRegistry::new()),
			}),
		}
	}

	/// Adds a route.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid.
	pub fn route(self, path: &str, payload: T) -> Self {
		self.register(path, payload);
		self
	}

	/// Adds the default route.
	pub fn default_route(self, payload: T) -> Self {
		self.register_default(payload);
		self
	}

	/// Registers a route whose path is relative to this router.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid; see [`Router::try_register`].
	pub fn register(&self, path: &str, payload: T) -> RouteId {
		let full_path = self.full_path(path);
		self.inner.registry.borrow_mut().register(full_path, payload)
	}

	/// Registers a route, rejecting invalid patterns.
	pub fn try_register(&self, path: &str, payload: T) -> Result<RouteId, RouterError> {
		let full_path = self.full_path(path);
		let id = self
			.inner
			.registry
			.borrow_mut()
			.try_register(full_path, payload)?;
		Ok(id)
	}

	/// Registers the default route.
	pub fn register_default(&self, payload: T) -> RouteId {
		self.inner.registry.borrow_mut().register_default(payload)
	}

	/// Removes a route and returns its payload.
	pub fn unregister(&self, id: RouteId) -> Option<T> {
		self.inner.registry.borrow_mut().unregister(id)
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.inner.registry.borrow().len()
	}

	/// Returns the application basepath.
	pub fn basepath(&self) -> &str {
		&self.inner.basepath
	}

	/// Returns the link resolution context of this router.
	pub fn context(&self) -> &RouterContext {
		&self.inner.context
	}

	/// Returns the history this router drives.
	pub fn history(&self) -> &History<S> {
		&self.inner.history
	}

	/// Returns the current location relative to the basepath.
	pub fn location(&self) -> Result<Location, RouterError> {
		normalize_location(&self.inner.history.location(), &self.inner.basepath)
	}

	/// Resolves a link from this router's context.
	pub fn resolve_link(&self, path: &str) -> String {
		self.inner.context.resolve(path)
	}

	/// Navigates relative to this router's context. Deltas are passed through
	/// unchanged.
	pub fn navigate(
		&self,
		to: impl Into<NavigateTo>,
		options: NavigateOptions,
	) -> Result<(), RouterError> {
		let target = match to.into() {
			NavigateTo::Path(path) => NavigateTo::Path(self.resolve_link(&path)),
			delta @ NavigateTo::Delta(_) => delta,
		};
		self.inner.history.navigate(target, options)?;
		Ok(())
	}

	/// Matches `path`, resolved from this router's context, against the
	/// current location.
	pub fn match_location(&self, path: &str) -> Result<Option<PathMatch>, RouterError> {
		let resolved = self.resolve_link(path);
		let full_path = strip_basepath(&resolved, &self.inner.basepath)?;
		let location = self.location()?;

		let pattern = RoutePattern::try_new(full_path, ())?;
		let found = match_route(&pattern, &location.pathname).map(|found| PathMatch {
			params: found.params,
			uri: found.uri,
		});
		Ok(found)
	}

	/// Returns the part of the current location a route at `path` would
	/// consume, ignoring any splat.
	pub fn base_uri(&self, path: &str) -> Result<Option<String>, RouterError> {
		let location = self.location()?;
		extract_base_uri(&self.full_path(path), &location.pathname)
	}

	fn full_path(&self, path: &str) -> String {
		combine_paths(&self.inner.route_base, path)
	}
}

impl<T: Clone, S: HistorySource> Router<T, S> {
	/// Returns the route matching `pathname` (relative to the basepath).
	pub fn match_path(&self, pathname: &str) -> Option<ActiveRoute<T>> {
		self.inner
			.registry
			.borrow()
			.pick(pathname)
			.map(ActiveRoute::from_match)
	}

	/// Returns the route matching the current location.
	pub fn current(&self) -> Result<Option<ActiveRoute<T>>, RouterError> {
		let location = self.location()?;
		Ok(self.match_path(&location.pathname))
	}

	/// Returns the context for content rendered by `route`.
	pub fn route_context(&self, route: &ActiveRoute<T>) -> RouterContext {
		self.inner.context.nest(&route.uri)
	}

	/// Creates a router for routes nested in `route`. It shares this router's
	/// history and basepath.
	pub fn nest<U>(&self, route: &ActiveRoute<T>) -> Router<U, S> {
		Router {
			inner: Rc::new(RouterInner {
				history: self.inner.history.clone(),
				basepath: self.inner.basepath.clone(),
				context: self.route_context(route),
				route_base: strip_splat(&route.path).to_string(),
				registry: RefCell::new(RouteRegistry::new()),
			}),
		}
	}

	fn change(&self, location: Location, action: Option<Action>) -> RouteChange<T> {
		let route = normalize_location(&location, &self.inner.basepath)
			.map(|normalized| self.match_path(&normalized.pathname));

		match &route {
			Ok(Some(active)) => tracing::debug!(
				pathname = %location.pathname,
				route = %active.id,
				path = %active.path,
				"route changed"
			),
			Ok(None) => tracing::debug!(pathname = %location.pathname, "no route matched"),
			Err(error) => tracing::error!(%error, "location outside of router basepath"),
		}

		RouteChange {
			location,
			action,
			route,
		}
	}
}

impl<T: Clone + 'static, S: HistorySource + 'static> Router<T, S> {
	/// Calls `hook` with the current route, then again after every
	/// navigation. Returns the subscription handle.
	pub fn start<F>(&self, hook: F) -> Unlisten
	where
		F: Fn(RouteChange<T>) + 'static,
	{
		hook(self.change(self.inner.history.location(), None));

		let router = Rc::downgrade(&self.inner);
		self.inner.history.listen(move |event| {
			if let Some(inner) = router.upgrade() {
				let router = Router { inner };
				hook(router.change(event.location.clone(), Some(event.action)));
			}
		})
	}
}

impl<T, S> std::fmt::Debug for Router<T, S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("basepath", &self.inner.basepath)
			.field("context", &self.inner.context)
			.field("route_base", &self.inner.route_base)
			.field("routes", &self.inner.registry.borrow().len())
			.finish()
	}
}
