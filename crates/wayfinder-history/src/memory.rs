//! In-memory history source.
//!
//! Used in tests, outside the browser and inside sandboxed frames. The stack
//! behaves like a browser's: navigating to a path from the middle of the
//! stack drops the entries after the cursor.

use crate::error::PlatformError;
use crate::location::EntryState;
use crate::source::{GoOutcome, HistorySource};
use wayfinder_paths::{PathParts, parse_path};

/// One frame of the in-memory stack.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEntry {
	/// Pathname as navigated to.
	pub pathname: String,
	/// `""` or a string starting with `?`.
	pub search: String,
	/// `""` or a string starting with `#`.
	pub hash: String,
	/// Entry state, `None` for the initial entry and fallback loads.
	pub state: Option<EntryState>,
}

impl MemoryEntry {
	fn new(uri: &str, state: Option<EntryState>) -> Self {
		let PathParts {
			pathname,
			search,
			hash,
		} = parse_path(uri);
		Self {
			pathname,
			search,
			hash,
			state,
		}
	}
}

/// A history stack kept in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySource {
	entries: Vec<MemoryEntry>,
	index: usize,
}

impl MemorySource {
	/// Creates a stack holding a single entry for `initial_path`, which may
	/// carry a query.
	pub fn new(initial_path: &str) -> Self {
		Self {
			entries: vec![MemoryEntry::new(initial_path, None)],
			index: 0,
		}
	}

	/// Returns every entry, oldest first.
	pub fn entries(&self) -> &[MemoryEntry] {
		&self.entries
	}

	/// Returns the cursor position.
	pub fn index(&self) -> usize {
		self.index
	}

	fn current(&self) -> &MemoryEntry {
		&self.entries[self.index]
	}

	fn push(&mut self, entry: MemoryEntry) {
		self.index += 1;
		self.entries.truncate(self.index);
		self.entries.push(entry);
	}
}

impl Default for MemorySource {
	fn default() -> Self {
		Self::new("/")
	}
}

impl HistorySource for MemorySource {
	fn location(&self) -> PathParts {
		let entry = self.current();
		PathParts {
			pathname: entry.pathname.clone(),
			search: entry.search.clone(),
			hash: entry.hash.clone(),
		}
	}

	fn state(&self) -> Option<EntryState> {
		self.current().state.clone()
	}

	fn push_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError> {
		self.push(MemoryEntry::new(uri, Some(state)));
		Ok(())
	}

	fn replace_state(&mut self, state: EntryState, uri: &str) -> Result<(), PlatformError> {
		self.entries[self.index] = MemoryEntry::new(uri, Some(state));
		Ok(())
	}

	fn go(&mut self, delta: i32) -> GoOutcome {
		let target = isize::try_from(delta)
			.ok()
			.and_then(|delta| self.index.checked_add_signed(delta))
			.filter(|&target| target < self.entries.len());

		match target {
			Some(target) => {
				self.index = target;
				GoOutcome::Moved
			}
			None => GoOutcome::Ignored,
		}
	}

	fn assign(&mut self, uri: &str) -> Result<(), PlatformError> {
		self.push(MemoryEntry::new(uri, None));
		Ok(())
	}

	fn replace(&mut self, uri: &str) -> Result<(), PlatformError> {
		self.entries[self.index] = MemoryEntry::new(uri, None);
		Ok(())
	}
}
