//! # Wayfinder Router
//!
//! A routing context bound to a history: registered routes, basepath
//! handling, relative navigation and a render hook.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use wayfinder_history::{History, MemorySource, NavigateOptions};
//! use wayfinder_router::Router;
//!
//! let router = Router::with_basepath(History::new(MemorySource::new("/app")), "/app")
//!     .route("/", "home")
//!     .route("blog/:slug", "post")
//!     .default_route("not-found");
//!
//! let rendered = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&rendered);
//! let _handle = router.start(move |change| {
//!     let route = change.route.unwrap().unwrap();
//!     sink.borrow_mut().push(route.payload);
//! });
//!
//! router.navigate("blog/hello", NavigateOptions::new()).unwrap();
//! assert_eq!(router.history().location().pathname, "/app/blog/hello");
//! assert_eq!(*rendered.borrow(), vec!["home", "post"]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod location;
pub mod registry;
pub mod router;

pub use config::{HistoryConfig, RouterConfig};
pub use context::RouterContext;
pub use error::RouterError;
pub use location::{extract_base_uri, normalize_location, strip_basepath};
pub use registry::{RouteEntry, RouteId, RouteRegistry};
pub use router::{ActiveRoute, PathMatch, RouteChange, Router};
