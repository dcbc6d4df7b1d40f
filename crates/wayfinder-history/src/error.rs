//! History error types.

/// Error returned by [`History::navigate`](crate::History::navigate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
	/// Path navigation needs an absolute target.
	#[error("Navigation target '{0}' must be an absolute path starting with '/'")]
	RelativeNavigation(String),
}

/// Error raised by a history source's underlying platform.
///
/// These never reach callers of `navigate`: a failed write falls back to a
/// direct location change and only the fallback's failure is logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
	/// The platform has no usable history (no window, no document...).
	#[error("History unavailable: {0}")]
	Unavailable(String),
	/// A platform call threw.
	#[error("{operation} failed: {message}")]
	Operation {
		/// Name of the failing call, e.g. `pushState`.
		operation: &'static str,
		/// Message reported by the platform.
		message: String,
	},
	/// Entry state could not be converted for the platform.
	#[error("Invalid entry state: {0}")]
	State(String),
}

impl From<serde_json::Error> for PlatformError {
	fn from(error: serde_json::Error) -> Self {
		Self::State(error.to_string())
	}
}
