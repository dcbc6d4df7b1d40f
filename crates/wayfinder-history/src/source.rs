//! The interface a [`History`](crate::History) drives.

use crate::error::PlatformError;
use crate::location::EntryState;
use wayfinder_paths::PathParts;

/// Callback a source invokes when the location changed outside of
/// `navigate` (back/forward buttons).
pub type PopHandler = Box<dyn Fn()>;

/// Result of moving the cursor by a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoOutcome {
	/// The cursor moved; the new location can be read right away.
	Moved,
	/// The target was out of range and nothing happened.
	Ignored,
	/// The move completes later and is reported through the pop handler.
	Pending,
}

/// A navigation stack: the platform's history or an in-memory stand-in.
pub trait HistorySource {
	/// Returns the raw (not normalized) location of the current entry.
	fn location(&self) -> PathParts;

	/// Returns the state of the current entry, if it has one.
	fn state(&self) -> Option<EntryState>;

	/// Appends an entry after the current one, discarding any forward
	/// entries.
	fn push_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError>;

	/// Overwrites the current entry.
	fn replace_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError>;

	/// Moves the cursor by `delta` entries.
	fn go(&mut self, delta: i32) -> GoOutcome;

	/// Fallback for a failed push: loads `uri` directly.
	fn assign(&mut self, uri: &str) -> Result<(), PlatformError>;

	/// Fallback for a failed replace: loads `uri` in place of the current
	/// entry.
	fn replace(&mut self, uri: &str) -> Result<(), PlatformError>;

	/// Installs the handler for external location changes. Sources without
	/// external changes ignore it.
	fn set_pop_handler(&mut self, handler: PopHandler) {
		let _ = handler;
	}
}

impl<S: HistorySource + ?Sized> HistorySource for Box<S> {
	fn location(&self) -> PathParts {
		(**self).location()
	}

	fn state(&self) -> Option<EntryState> {
		(**self).state()
	}

	fn push_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError> {
		(**self).push_state(state, uri)
	}

	fn replace_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError> {
		(**self).replace_state(state, uri)
	}

	fn go(&mut self, delta: i32) -> GoOutcome {
		(**self).go(delta)
	}

	fn assign(&mut self, uri: &str) -> Result<(), PlatformError> {
		(**self).assign(uri)
	}

	fn replace(&mut self, uri: &str) -> Result<(), PlatformError> {
		(**self).replace(uri)
	}

	fn set_pop_handler(&mut self, handler: PopHandler) {
		(**self).set_pop_handler(handler)
	}
}
