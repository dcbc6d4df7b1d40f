//! Router configuration.
//!
//! ```
//! use wayfinder_router::{HistoryConfig, RouterConfig};
//!
//! let config = RouterConfig::from_json(
//!     r#"{ "basepath": "/app", "history": { "type": "memory", "initial_path": "/app/inbox" } }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.basepath, "/app");
//! assert_eq!(
//!     config.history,
//!     HistoryConfig::Memory { initial_path: "/app/inbox".to_string() }
//! );
//! ```

use crate::error::RouterError;
use crate::router::Router;
use serde::{Deserialize, Serialize};
use wayfinder_history::{DynHistory, History, HistorySource, MemorySource, global_history};

/// Which history a router drives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HistoryConfig {
	/// The shared default history of the current thread.
	#[default]
	Auto,
	/// The window's history. Only available on `wasm32`.
	Browser,
	/// A private in-memory history.
	Memory {
		/// Path of the initial entry.
		#[serde(default = "default_path")]
		initial_path: String,
	},
}

impl HistoryConfig {
	/// Creates the configured history.
	pub fn build(&self) -> Result<DynHistory, RouterError> {
		match self {
			Self::Auto => Ok(global_history()),
			Self::Browser => browser_history(),
			Self::Memory { initial_path } => {
				let source: Box<dyn HistorySource> = Box::new(MemorySource::new(initial_path));
				Ok(History::new(source))
			}
		}
	}
}

#[cfg(target_arch = "wasm32")]
fn browser_history() -> Result<DynHistory, RouterError> {
	use wayfinder_history::{BrowserSource, WindowPlatform};

	let platform = WindowPlatform::new()?;
	let source: Box<dyn HistorySource> = Box::new(BrowserSource::new(platform));
	Ok(History::new(source))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_history() -> Result<DynHistory, RouterError> {
	Err(wayfinder_history::PlatformError::Unavailable(
		"browser history requires a wasm32 target".to_string(),
	)
	.into())
}

fn default_path() -> String {
	"/".to_string()
}

/// Settings of a top-level router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
	/// Path the application is served under.
	pub basepath: String,
	/// History to drive.
	pub history: HistoryConfig,
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			basepath: default_path(),
			history: HistoryConfig::default(),
		}
	}
}

impl RouterConfig {
	/// Creates the default configuration: served at `/`, shared history.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the basepath.
	pub fn with_basepath(mut self, basepath: impl Into<String>) -> Self {
		self.basepath = basepath.into();
		self
	}

	/// Sets the history.
	pub fn with_history(mut self, history: HistoryConfig) -> Self {
		self.history = history;
		self
	}

	/// Parses a JSON configuration document. Missing fields take their
	/// defaults.
	pub fn from_json(json: &str) -> Result<Self, RouterError> {
		serde_json::from_str(json).map_err(|e| RouterError::Config(e.to_string()))
	}

	/// Builds a router with no routes.
	pub fn build<T>(&self) -> Result<Router<T>, RouterError> {
		let history = self.history.build()?;
		Ok(Router::with_basepath(history, &self.basepath))
	}
}
