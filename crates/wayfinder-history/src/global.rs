//! The default history of the current thread.
//!
//! Resolved on first use: the browser source when running in a window with a
//! DOM and a non-opaque origin, the memory source otherwise. It is never torn
//! down. Routing contexts that must not share it (nested routers, tests,
//! embedded widgets) construct their own [`History`] instead.

use crate::error::HistoryError;
use crate::history::{History, NavigateOptions, NavigateTo};
use crate::memory::MemorySource;
use crate::source::HistorySource;
use std::cell::OnceCell;

/// A history over a type-erased source.
pub type DynHistory = History<Box<dyn HistorySource>>;

thread_local! {
	static GLOBAL_HISTORY: OnceCell<DynHistory> = const { OnceCell::new() };
}

/// Returns a handle to the default history, creating it on first use.
pub fn global_history() -> DynHistory {
	GLOBAL_HISTORY.with(|cell| cell.get_or_init(|| History::new(default_source())).clone())
}

/// Navigates the default history.
///
/// # Example
///
/// ```
/// use wayfinder_history::{NavigateOptions, global_history, navigate};
///
/// navigate("/inbox", NavigateOptions::new()).unwrap();
/// assert_eq!(global_history().location().pathname, "/inbox");
/// ```
pub fn navigate(to: impl Into<NavigateTo>, options: NavigateOptions) -> Result<(), HistoryError> {
	global_history().navigate(to, options)
}

/// Picks the source for the default history.
pub fn default_source() -> Box<dyn HistorySource> {
	#[cfg(target_arch = "wasm32")]
	{
		use crate::browser::BrowserSource;
		use crate::web::WindowPlatform;

		if WindowPlatform::is_available() {
			match WindowPlatform::new() {
				Ok(platform) => {
					tracing::debug!("using browser history");
					return Box::new(BrowserSource::new(platform));
				}
				Err(error) => tracing::warn!(%error, "browser history unavailable"),
			}
		}
	}

	tracing::debug!("using memory history");
	Box::new(MemorySource::default())
}
