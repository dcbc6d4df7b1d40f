//! Router error types.

use wayfinder_history::{HistoryError, PlatformError};
use wayfinder_routes::PatternError;

/// Errors produced by a [`Router`](crate::Router).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// The location lies outside the router's basepath. This means the router
	/// is mounted under the wrong basepath and is a configuration error.
	#[error(
		"Invalid state: All locations must begin with the basepath \"{basepath}\", found \"{pathname}\""
	)]
	BasepathMismatch {
		/// The offending pathname.
		pathname: String,
		/// The router's basepath.
		basepath: String,
	},
	/// A route pattern was rejected.
	#[error("Invalid route pattern: {0}")]
	Pattern(#[from] PatternError),
	/// Navigation was rejected.
	#[error("Navigation failed: {0}")]
	Navigation(#[from] HistoryError),
	/// The requested history is not available on this platform.
	#[error(transparent)]
	Platform(#[from] PlatformError),
	/// The configuration document could not be parsed.
	#[error("Invalid router configuration: {0}")]
	Config(String),
}
