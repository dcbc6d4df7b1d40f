//! History source backed by a browser-like platform.
//!
//! The platform is abstracted behind [`Platform`] so the source logic (state
//! encoding, go semantics, popstate forwarding) does not depend on a real
//! window. On `wasm32` the [`WindowPlatform`](crate::web::WindowPlatform)
//! implements it with `web-sys`.

use crate::error::PlatformError;
use crate::location::EntryState;
use crate::source::{GoOutcome, HistorySource, PopHandler};
use serde_json::Value;
use wayfinder_paths::PathParts;

/// The raw navigation primitives of a browser.
pub trait Platform {
	/// Returns `location.pathname`, `location.search` and `location.hash`.
	fn location(&self) -> PathParts;

	/// Returns `history.state` as JSON, `None` when it is null or not
	/// representable.
	fn state(&self) -> Option<Value>;

	/// `history.pushState(state, "", url)`.
	fn push_state(&self, state: &Value, url: &str) -> Result<(), PlatformError>;

	/// `history.replaceState(state, "", url)`.
	fn replace_state(&self, state: &Value, url: &str) -> Result<(), PlatformError>;

	/// `history.go(delta)`.
	fn go(&self, delta: i32) -> Result<(), PlatformError>;

	/// `location.assign(url)`.
	fn assign(&self, url: &str) -> Result<(), PlatformError>;

	/// `location.replace(url)`.
	fn replace(&self, url: &str) -> Result<(), PlatformError>;

	/// Registers `handler` for the `popstate` event for the lifetime of the
	/// page.
	fn on_popstate(&self, handler: PopHandler) -> Result<(), PlatformError>;
}

/// A [`HistorySource`] over a [`Platform`].
#[derive(Debug, Clone)]
pub struct BrowserSource<P> {
	platform: P,
}

impl<P: Platform> BrowserSource<P> {
	/// Wraps a platform.
	pub fn new(platform: P) -> Self {
		Self { platform }
	}

	/// Returns the platform.
	pub fn platform(&self) -> &P {
		&self.platform
	}
}

impl<P: Platform> HistorySource for BrowserSource<P> {
	fn location(&self) -> PathParts {
		self.platform.location()
	}

	fn state(&self) -> Option<EntryState> {
		// Entries pushed by other code may carry arbitrary state.
		self.platform
			.state()
			.and_then(|value| serde_json::from_value(value).ok())
	}

	fn push_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError> {
		let state = serde_json::to_value(&state)?;
		self.platform.push_state(&state, uri)
	}

	fn replace_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError> {
		let state = serde_json::to_value(&state)?;
		self.platform.replace_state(&state, uri)
	}

	fn go(&mut self, delta: i32) -> GoOutcome {
		match self.platform.go(delta) {
			Ok(()) => GoOutcome::Pending,
			Err(error) => {
				tracing::warn!(%error, delta, "history.go failed");
				GoOutcome::Ignored
			}
		}
	}

	fn assign(&mut self, uri: &str) -> Result<(), PlatformError> {
		self.platform.assign(uri)
	}

	fn replace(&mut self, uri: &str) -> Result<(), PlatformError> {
		self.platform.replace(uri)
	}

	fn set_pop_handler(&mut self, handler: PopHandler) {
		if let Err(error) = self.platform.on_popstate(handler) {
			tracing::error!(%error, "failed to listen for popstate");
		}
	}
}
