//! The history service.
//!
//! A [`History`] owns a [`HistorySource`], caches the current [`Location`] and
//! notifies listeners after every committed navigation. Everything happens
//! synchronously inside the call that caused it.
//!
//! Listeners are snapshotted before dispatch, so a listener may subscribe,
//! unsubscribe or even navigate from inside its callback. A navigation started
//! from a callback is dispatched before the outer dispatch finishes; callers
//! that do this must tolerate seeing events out of order.

use crate::error::HistoryError;
use crate::location::{Action, EntryState, HistoryEvent, Location};
use crate::source::{GoOutcome, HistorySource};
use serde_json::Value;
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&HistoryEvent)>;
type ListenerList = RefCell<Vec<(u64, Listener)>>;

/// Where to navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateTo {
	/// An absolute path, optionally with query and hash.
	Path(String),
	/// A move along the stack; negative values go back.
	Delta(i32),
}

impl From<&str> for NavigateTo {
	fn from(path: &str) -> Self {
		Self::Path(path.to_string())
	}
}

impl From<String> for NavigateTo {
	fn from(path: String) -> Self {
		Self::Path(path)
	}
}

impl From<i32> for NavigateTo {
	fn from(delta: i32) -> Self {
		Self::Delta(delta)
	}
}

/// Options for path navigation. Ignored for deltas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateOptions {
	/// Data stored with the new entry and exposed as `location.state`.
	pub state: Option<Value>,
	/// Overwrite the current entry instead of pushing a new one.
	pub replace: bool,
}

impl NavigateOptions {
	/// Creates default options (push, no state).
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the entry state.
	pub fn with_state(mut self, state: Value) -> Self {
		self.state = Some(state);
		self
	}

	/// Sets whether to replace the current entry.
	pub fn with_replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}
}

/// Handle returned by [`History::listen`].
#[must_use = "dropping the handle keeps the listener registered; call `unlisten` to remove it"]
#[derive(Debug)]
pub struct Unlisten {
	listeners: Weak<ListenerList>,
	id: u64,
}

impl Unlisten {
	/// Removes the listener. Does nothing if the history is gone.
	pub fn unlisten(self) {
		if let Some(listeners) = self.listeners.upgrade() {
			listeners.borrow_mut().retain(|(id, _)| *id != self.id);
		}
	}
}

struct HistoryInner<S> {
	source: RefCell<S>,
	location: RefCell<Location>,
	listeners: Rc<ListenerList>,
	next_listener_id: Cell<u64>,
}

impl<S: HistorySource> HistoryInner<S> {
	fn read_location(&self) -> Location {
		let source = self.source.borrow();
		Location::from_parts(source.location(), source.state())
	}

	/// Recomputes the location and notifies every listener.
	fn commit(&self, action: Action) {
		let location = self.read_location();
		tracing::debug!(
			action = %action,
			pathname = %location.pathname,
			key = %location.key,
			"navigation committed"
		);
		*self.location.borrow_mut() = location.clone();

		let snapshot: Vec<Listener> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();
		let event = HistoryEvent { location, action };
		for listener in snapshot {
			listener(&event);
		}
	}
}

/// A history service over a source.
///
/// Cloning yields another handle to the same history.
pub struct History<S> {
	inner: Rc<HistoryInner<S>>,
}

impl<S> Clone for History<S> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

/// A non-owning handle to a [`History`], obtained from
/// [`History::downgrade`].
pub struct WeakHistory<S> {
	inner: Weak<HistoryInner<S>>,
}

impl<S> Clone for WeakHistory<S> {
	fn clone(&self) -> Self {
		Self {
			inner: Weak::clone(&self.inner),
		}
	}
}

impl<S> WeakHistory<S> {
	/// Returns the history if it is still alive.
	pub fn upgrade(&self) -> Option<History<S>> {
		self.inner.upgrade().map(|inner| History { inner })
	}
}

impl<S> std::fmt::Debug for WeakHistory<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WeakHistory")
			.field("alive", &(self.inner.strong_count() > 0))
			.finish()
	}
}

impl<S> History<S> {
	/// Returns a handle that does not keep the history alive.
	pub fn downgrade(&self) -> WeakHistory<S> {
		WeakHistory {
			inner: Rc::downgrade(&self.inner),
		}
	}
}

impl<S: HistorySource + 'static> History<S> {
	/// Creates a history over `source` and subscribes to its external
	/// location changes.
	pub fn new(source: S) -> Self {
		let location = Location::from_parts(source.location(), source.state());
		let inner = Rc::new(HistoryInner {
			source: RefCell::new(source),
			location: RefCell::new(location),
			listeners: Rc::new(RefCell::new(Vec::new())),
			next_listener_id: Cell::new(0),
		});

		let weak = Rc::downgrade(&inner);
		inner
			.source
			.borrow_mut()
			.set_pop_handler(Box::new(move || {
				if let Some(inner) = weak.upgrade() {
					inner.commit(Action::Pop);
				}
			}));

		Self { inner }
	}
}

impl<S: HistorySource> History<S> {
	/// Returns the current location.
	pub fn location(&self) -> Location {
		self.inner.location.borrow().clone()
	}

	/// Registers a listener called after every committed navigation,
	/// including back/forward moves made outside of [`History::navigate`].
	///
	/// The history owns its listeners. A listener that needs the history
	/// should capture a [`WeakHistory`] from [`History::downgrade`]; a
	/// captured `History` clone forms a cycle and the history is never freed.
	pub fn listen<F>(&self, listener: F) -> Unlisten
	where
		F: Fn(&HistoryEvent) + 'static,
	{
		let id = self.inner.next_listener_id.get();
		self.inner.next_listener_id.set(id + 1);
		self.inner
			.listeners
			.borrow_mut()
			.push((id, Rc::new(listener)));

		Unlisten {
			listeners: Rc::downgrade(&self.inner.listeners),
			id,
		}
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.listeners.borrow().len()
	}

	/// Navigates to a path or by a delta.
	///
	/// A path must be absolute. It is pushed, or replaces the current entry
	/// when `options.replace` is set; a write rejected by the platform falls
	/// back to a direct location change and is not reported. A delta moves
	/// the cursor; out of range deltas are ignored without notification.
	pub fn navigate(
		&self,
		to: impl Into<NavigateTo>,
		options: NavigateOptions,
	) -> Result<(), HistoryError> {
		match to.into() {
			NavigateTo::Path(path) => self.navigate_path(path, options),
			NavigateTo::Delta(delta) => {
				self.go(delta);
				Ok(())
			}
		}
	}

	/// Pushes `path`.
	pub fn push(&self, path: &str) -> Result<(), HistoryError> {
		self.navigate(path, NavigateOptions::new())
	}

	/// Replaces the current entry with `path`.
	pub fn replace(&self, path: &str) -> Result<(), HistoryError> {
		self.navigate(path, NavigateOptions::new().with_replace(true))
	}

	/// Moves `delta` entries along the stack.
	pub fn go(&self, delta: i32) {
		let outcome = self.inner.source.borrow_mut().go(delta);
		match outcome {
			GoOutcome::Moved => self.inner.commit(Action::Pop),
			GoOutcome::Ignored => tracing::debug!(delta, "history move out of range ignored"),
			GoOutcome::Pending => {}
		}
	}

	/// Goes one entry back.
	pub fn back(&self) {
		self.go(-1);
	}

	/// Goes one entry forward.
	pub fn forward(&self) {
		self.go(1);
	}

	/// Borrows the source, e.g. to inspect a memory stack.
	///
	/// # Panics
	///
	/// Panics if called while the history is writing to its source.
	pub fn source(&self) -> Ref<'_, S> {
		self.inner.source.borrow()
	}

	fn navigate_path(&self, path: String, options: NavigateOptions) -> Result<(), HistoryError> {
		if !path.starts_with('/') {
			return Err(HistoryError::RelativeNavigation(path));
		}

		let NavigateOptions { state, replace } = options;
		let entry = EntryState::new(state);
		{
			let mut source = self.inner.source.borrow_mut();
			let written = if replace {
				source.replace_state(entry, &path)
			} else {
				source.push_state(entry, &path)
			};

			if let Err(error) = written {
				tracing::warn!(%error, path = %path, replace, "history write failed, changing location directly");
				let fallback = if replace {
					source.replace(&path)
				} else {
					source.assign(&path)
				};
				if let Err(error) = fallback {
					tracing::error!(%error, path = %path, "location fallback failed");
				}
			}
		}

		self.inner.commit(if replace {
			Action::Replace
		} else {
			Action::Push
		});
		Ok(())
	}
}

impl<S> std::fmt::Debug for History<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("History")
			.field("location", &*self.inner.location.borrow())
			.field("listeners", &self.inner.listeners.borrow().len())
			.finish()
	}
}
