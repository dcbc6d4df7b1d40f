//! # Wayfinder History
//!
//! A history abstraction with pluggable sources.
//!
//! - [`MemorySource`] - an in-process stack, for tests and non-browser
//!   environments
//! - [`BrowserSource`] - the platform's history; on `wasm32` the window's via
//!   `WindowPlatform`
//!
//! [`History`] drives either one, keeps the current [`Location`] and notifies
//! listeners with `PUSH`, `REPLACE` or `POP` after every committed
//! navigation.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use wayfinder_history::{Action, History, MemorySource, NavigateOptions};
//!
//! let history = History::new(MemorySource::new("/one"));
//! let actions = Rc::new(RefCell::new(Vec::new()));
//!
//! let seen = Rc::clone(&actions);
//! let handle = history.listen(move |event| seen.borrow_mut().push(event.action));
//!
//! history.navigate("/two", NavigateOptions::new()).unwrap();
//! history.navigate(-1, NavigateOptions::new()).unwrap();
//! assert_eq!(history.location().pathname, "/one");
//! assert_eq!(*actions.borrow(), vec![Action::Push, Action::Pop]);
//!
//! handle.unlisten();
//! ```

#![warn(missing_docs)]

pub mod browser;
pub mod error;
pub mod global;
pub mod history;
pub mod location;
pub mod memory;
pub mod source;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use browser::{BrowserSource, Platform};
pub use error::{HistoryError, PlatformError};
pub use global::{DynHistory, default_source, global_history, navigate};
pub use history::{History, NavigateOptions, NavigateTo, Unlisten, WeakHistory};
pub use location::{Action, EntryState, HistoryEvent, INITIAL_KEY, Location};
pub use memory::{MemoryEntry, MemorySource};
pub use source::{GoOutcome, HistorySource, PopHandler};
#[cfg(target_arch = "wasm32")]
pub use web::WindowPlatform;
