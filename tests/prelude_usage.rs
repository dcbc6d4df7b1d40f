//! Integration tests for the facade crate
//!
//! These tests drive the whole stack through `wayfinder::prelude`, the way an
//! application would.

use rstest::rstest;
use serial_test::serial;
use std::cell::RefCell;
use std::rc::Rc;
use wayfinder::prelude::*;

#[rstest]
fn test_matching_through_prelude() {
	let routes = vec![
		RoutePattern::new("/", "home"),
		RoutePattern::new("groups/:id", "group"),
		RoutePattern::new("groups/main", "main"),
	];

	assert_eq!(*pick(&routes, "/groups/main").unwrap().payload(), "main");
	assert_eq!(*pick(&routes, "/groups/7").unwrap().payload(), "group");
	assert!(pick(&routes, "/nope").is_none());
}

#[rstest]
fn test_router_over_memory_history() {
	// Arrange
	let router = Router::new(History::new(MemorySource::new("/")))
		.route("/", "home")
		.route("inbox/:message", "message");
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	let handle = router.start(move |change| {
		let payload = change.route.ok().flatten().map(|route| route.payload);
		sink.borrow_mut().push(payload);
	});

	// Act
	router
		.navigate(
			"inbox/42",
			NavigateOptions::new().with_state(serde_json::json!({ "from": "list" })),
		)
		.unwrap();
	router.history().back();
	handle.unlisten();
	router.history().forward();

	// Assert
	assert_eq!(*seen.borrow(), vec![Some("home"), Some("message"), Some("home")]);
	let location = router.history().location();
	assert_eq!(location.pathname, "/inbox/42");
	assert_eq!(
		location.state,
		Some(serde_json::json!({ "from": "list" }))
	);
}

#[rstest]
#[serial(global_history)]
fn test_global_navigate() {
	navigate("/about?tab=team", NavigateOptions::new()).unwrap();

	let location = global_history().location();
	assert_eq!(location.pathname, "/about");
	assert_eq!(location.search, "?tab=team");
}

#[rstest]
fn test_config_built_router() {
	let config = RouterConfig::new()
		.with_basepath("/admin")
		.with_history(HistoryConfig::Memory {
			initial_path: "/admin/users".to_string(),
		});
	let router: Router<&str> = config.build().unwrap().route("users", "users");

	assert_eq!(router.current().unwrap().unwrap().payload, "users");
	assert_eq!(router.resolve_link("/"), "/admin");
}
