//! `web-sys` implementation of [`Platform`].

use crate::browser::Platform;
use crate::error::PlatformError;
use crate::source::PopHandler;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wayfinder_paths::PathParts;
use web_sys::{Event, History, Window};

/// The browser window's history and location.
#[derive(Debug, Clone)]
pub struct WindowPlatform {
	window: Window,
}

impl WindowPlatform {
	/// Binds to the global window.
	pub fn new() -> Result<Self, PlatformError> {
		let window =
			web_sys::window().ok_or_else(|| PlatformError::Unavailable("No window object".to_string()))?;
		Ok(Self { window })
	}

	/// Returns whether a DOM is present and the page does not run with an
	/// opaque origin (sandboxed frame), where history writes are refused.
	pub fn is_available() -> bool {
		let Some(window) = web_sys::window() else {
			return false;
		};
		if window.document().is_none() {
			return false;
		}
		window
			.location()
			.origin()
			.is_ok_and(|origin| origin != "null")
	}

	fn history(&self) -> Result<History, PlatformError> {
		self.window
			.history()
			.map_err(|error| js_error("window.history", error))
	}
}

impl Platform for WindowPlatform {
	fn location(&self) -> PathParts {
		let location = self.window.location();
		PathParts {
			pathname: location.pathname().unwrap_or_else(|_| "/".to_string()),
			search: location.search().unwrap_or_default(),
			hash: location.hash().unwrap_or_default(),
		}
	}

	fn state(&self) -> Option<Value> {
		let state = self.history().ok()?.state().ok()?;
		if state.is_null() || state.is_undefined() {
			return None;
		}
		let text = js_sys::JSON::stringify(&state).ok()?;
		serde_json::from_str(&String::from(text)).ok()
	}

	fn push_state(&self, state: &Value, url: &str) -> Result<(), PlatformError> {
		let state = to_js(state)?;
		self.history()?
			.push_state_with_url(&state, "", Some(url))
			.map_err(|error| js_error("pushState", error))
	}

	fn replace_state(&self, state: &Value, url: &str) -> Result<(), PlatformError> {
		let state = to_js(state)?;
		self.history()?
			.replace_state_with_url(&state, "", Some(url))
			.map_err(|error| js_error("replaceState", error))
	}

	fn go(&self, delta: i32) -> Result<(), PlatformError> {
		self.history()?
			.go_with_delta(delta)
			.map_err(|error| js_error("history.go", error))
	}

	fn assign(&self, url: &str) -> Result<(), PlatformError> {
		self.window
			.location()
			.assign(url)
			.map_err(|error| js_error("location.assign", error))
	}

	fn replace(&self, url: &str) -> Result<(), PlatformError> {
		self.window
			.location()
			.replace(url)
			.map_err(|error| js_error("location.replace", error))
	}

	fn on_popstate(&self, handler: PopHandler) -> Result<(), PlatformError> {
		let closure = Closure::wrap(Box::new(move |_event: Event| {
			handler();
		}) as Box<dyn FnMut(_)>);

		self.window
			.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
			.map_err(|error| js_error("addEventListener", error))?;

		// Lives as long as the page
		closure.forget();
		Ok(())
	}
}

fn to_js(value: &Value) -> Result<JsValue, PlatformError> {
	let text = serde_json::to_string(value)?;
	js_sys::JSON::parse(&text).map_err(|error| js_error("JSON.parse", error))
}

fn js_error(operation: &'static str, error: JsValue) -> PlatformError {
	PlatformError::Operation {
		operation,
		message: error.as_string().unwrap_or_else(|| format!("{:?}", error)),
	}
}
