//! Locations, entry state and navigation events.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wayfinder_paths::{PathParts, normalize_pathname};

/// Key of an entry that was not created through `navigate`.
pub const INITIAL_KEY: &str = "initial";

/// The kind of a committed navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
	/// A new entry was appended.
	Push,
	/// The current entry was overwritten.
	Replace,
	/// The cursor moved along the stack (back/forward or a delta).
	Pop,
}

impl std::fmt::Display for Action {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Push => write!(f, "PUSH"),
			Self::Replace => write!(f, "REPLACE"),
			Self::Pop => write!(f, "POP"),
		}
	}
}

/// The state stored with a history entry: a unique key plus the caller's
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryState {
	/// Unique entry key.
	pub key: String,
	/// Opaque caller data.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}

impl EntryState {
	/// Wraps `data` with a freshly generated key.
	pub fn new(data: Option<Value>) -> Self {
		Self {
			key: uuid::Uuid::new_v4().simple().to_string(),
			data,
		}
	}
}

/// An immutable snapshot of the current location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
	/// Canonically percent-encoded pathname.
	pub pathname: String,
	/// `""` or a string starting with `?`.
	pub search: String,
	/// `""` or a string starting with `#`.
	pub hash: String,
	/// Data passed with the navigation that created the entry.
	pub state: Option<Value>,
	/// Key of the entry, [`INITIAL_KEY`] for entries without one.
	pub key: String,
}

impl Location {
	/// Builds a location from a source's raw parts and entry state. The
	/// pathname is normalized by decoding and re-encoding it.
	pub fn from_parts(parts: PathParts, entry: Option<EntryState>) -> Self {
		let (key, state) = match entry {
			Some(entry) => (entry.key, entry.data),
			None => (INITIAL_KEY.to_string(), None),
		};

		Self {
			pathname: normalize_pathname(&parts.pathname),
			search: parts.search,
			hash: parts.hash,
			state,
			key,
		}
	}

	/// Returns pathname, search and hash as one string.
	pub fn href(&self) -> String {
		format!("{}{}{}", self.pathname, self.search, self.hash)
	}
}

/// What listeners receive on every committed navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEvent {
	/// The new location.
	pub location: Location,
	/// How it was reached.
	pub action: Action,
}
