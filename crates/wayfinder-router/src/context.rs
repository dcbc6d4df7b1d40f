//! Link resolution context.

use wayfinder_paths::{normalize_path, resolve_link};

/// Where links are resolved from: the enclosing route's base and the
/// application's basepath.
///
/// A context is passed explicitly from a router to the routes it renders and
/// from a route to its children, never looked up implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterContext {
	base: String,
	app_base: String,
}

impl RouterContext {
	/// Creates the root context of an application served under `app_base`.
	pub fn new(app_base: &str) -> Self {
		Self {
			base: "/".to_string(),
			app_base: normalize_path(app_base),
		}
	}

	/// Returns the base of the enclosing route, relative to the application
	/// basepath.
	pub fn base(&self) -> &str {
		&self.base
	}

	/// Returns the application basepath.
	pub fn app_base(&self) -> &str {
		&self.app_base
	}

	/// Returns the context of a route that consumed `uri`.
	pub fn nest(&self, uri: &str) -> Self {
		Self {
			base: normalize_path(uri),
			app_base: self.app_base.clone(),
		}
	}

	/// Resolves `path` to an absolute href.
	///
	/// Relative paths resolve against the route base, absolute ones against
	/// the application root; both end up under the application basepath.
	pub fn resolve(&self, path: &str) -> String {
		resolve_link(path, &self.base, &self.app_base)
	}
}

impl Default for RouterContext {
	fn default() -> Self {
		Self::new("/")
	}
}
