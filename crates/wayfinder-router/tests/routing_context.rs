//! Integration tests for routing contexts
//!
//! These tests verify:
//! 1. The render hook follows navigation, including back/forward
//! 2. Basepath handling and the basepath mismatch error
//! 3. Relative navigation and link resolution in nested routers
//! 4. Ad hoc matching against the current location

use rstest::{fixture, rstest};
use serial_test::serial;
use std::cell::RefCell;
use std::rc::Rc;
use wayfinder_history::{Action, History, MemorySource, NavigateOptions, global_history};
use wayfinder_router::{
	ActiveRoute, HistoryConfig, RouteChange, Router, RouterConfig, RouterContext, RouterError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
	Home,
	Blog,
	Settings,
	NotFound,
}

#[fixture]
fn app() -> Router<Page, MemorySource> {
	Router::with_basepath(History::new(MemorySource::new("/app")), "/app")
		.route("/", Page::Home)
		.route("blog/*", Page::Blog)
		.route("settings", Page::Settings)
		.default_route(Page::NotFound)
}

fn record(router: &Router<Page, MemorySource>) -> Rc<RefCell<Vec<RouteChange<Page>>>> {
	let changes = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&changes);
	let _handle = router.start(move |change| sink.borrow_mut().push(change));
	changes
}

fn pages(changes: &[RouteChange<Page>]) -> Vec<Option<Page>> {
	changes
		.iter()
		.map(|change| {
			change
				.route
				.as_ref()
				.ok()
				.and_then(|route| route.as_ref().map(|route| route.payload))
		})
		.collect()
}

#[rstest]
fn test_hook_follows_navigation(app: Router<Page, MemorySource>) {
	// Arrange
	let changes = record(&app);

	// Act
	app.navigate("settings", NavigateOptions::new()).unwrap();
	app.navigate("/blog/2024/hello", NavigateOptions::new()).unwrap();
	app.navigate(-1, NavigateOptions::new()).unwrap();
	app.navigate("/missing", NavigateOptions::new().with_replace(true))
		.unwrap();

	// Assert
	let changes = changes.borrow();
	assert_eq!(
		pages(&changes),
		vec![
			Some(Page::Home),
			Some(Page::Settings),
			Some(Page::Blog),
			Some(Page::Settings),
			Some(Page::NotFound),
		]
	);
	let actions: Vec<Option<Action>> = changes.iter().map(|change| change.action).collect();
	assert_eq!(
		actions,
		vec![
			None,
			Some(Action::Push),
			Some(Action::Push),
			Some(Action::Pop),
			Some(Action::Replace),
		]
	);
}

#[rstest]
fn test_locations_carry_the_basepath(app: Router<Page, MemorySource>) {
	app.navigate("blog/2024/hello?draft=1", NavigateOptions::new())
		.unwrap();

	let raw = app.history().location();
	assert_eq!(raw.pathname, "/app/blog/2024/hello");
	assert_eq!(raw.search, "?draft=1");

	let relative = app.location().unwrap();
	assert_eq!(relative.pathname, "/blog/2024/hello");

	let active = app.current().unwrap().unwrap();
	assert_eq!(active.param("*"), Some("2024/hello"));
	assert_eq!(active.uri, "/blog");
}

#[rstest]
fn test_location_outside_basepath_is_reported(app: Router<Page, MemorySource>) {
	let changes = record(&app);

	app.history().push("/elsewhere").unwrap();

	let changes = changes.borrow();
	let last = changes.last().unwrap();
	assert_eq!(
		last.route,
		Err(RouterError::BasepathMismatch {
			pathname: "/elsewhere".to_string(),
			basepath: "/app".to_string(),
		})
	);
	assert!(matches!(
		app.current(),
		Err(RouterError::BasepathMismatch { .. })
	));
}

#[rstest]
fn test_nested_router_resolves_from_parent_route(app: Router<Page, MemorySource>) {
	// Arrange
	app.navigate("/blog/2024/hello", NavigateOptions::new()).unwrap();
	let blog: ActiveRoute<Page> = app.current().unwrap().unwrap();

	// Act
	let posts: Router<&str, MemorySource> = app
		.nest(&blog)
		.route("/", "index")
		.route(":year/:slug", "post");

	// Assert
	let post = posts.current().unwrap().unwrap();
	assert_eq!(post.payload, "post");
	assert_eq!(post.path, "blog/:year/:slug/");
	assert_eq!(post.param("year"), Some("2024"));
	assert_eq!(post.param("slug"), Some("hello"));

	assert_eq!(posts.resolve_link("2025/next"), "/app/blog/2025/next");
	assert_eq!(posts.resolve_link("/settings"), "/app/settings");

	posts.navigate("..", NavigateOptions::new()).unwrap();
	assert_eq!(app.history().location().pathname, "/app");
}

#[rstest]
fn test_nested_route_context_resolves_relative_links(app: Router<Page, MemorySource>) {
	app.navigate("/blog/2024/hello", NavigateOptions::new()).unwrap();
	let posts: Router<&str, MemorySource> = app
		.nest(&app.current().unwrap().unwrap())
		.route(":year/:slug", "post");

	let post = posts.current().unwrap().unwrap();
	let context = posts.route_context(&post);

	assert_eq!(context.base(), "/blog/2024/hello");
	assert_eq!(context.resolve("comments"), "/app/blog/2024/hello/comments");
	assert_eq!(context.resolve("../other"), "/app/blog/2024/other");
}

#[rstest]
#[case("settings", true)]
#[case("/settings", true)]
#[case("blog", false)]
fn test_match_location(
	app: Router<Page, MemorySource>,
	#[case] path: &str,
	#[case] expected: bool,
) {
	app.navigate("/settings", NavigateOptions::new()).unwrap();

	let found = app.match_location(path).unwrap();

	assert_eq!(found.is_some(), expected);
	if let Some(found) = found {
		assert_eq!(found.uri, "/settings");
	}
}

#[rstest]
fn test_match_location_binds_params(app: Router<Page, MemorySource>) {
	app.navigate("/blog/2024/hello", NavigateOptions::new()).unwrap();

	let found = app.match_location("blog/:year/*").unwrap().unwrap();

	assert_eq!(found.params.get("year").map(String::as_str), Some("2024"));
	assert_eq!(found.params.get("*").map(String::as_str), Some("hello"));
	assert_eq!(found.uri, "/blog/2024");
}

#[rstest]
fn test_base_uri(app: Router<Page, MemorySource>) {
	app.navigate("/blog/2024/hello", NavigateOptions::new()).unwrap();

	assert_eq!(app.base_uri("blog/*").unwrap().as_deref(), Some("/blog"));
	assert_eq!(app.base_uri("settings").unwrap(), None);
}

#[rstest]
#[case("relative", "/currentBase", "/", "/currentBase/relative")]
#[case("/absolute", "/currentBase", "/appBase", "/appBase/absolute")]
#[case("relative", "/routeBase", "/base", "/base/routeBase/relative")]
#[case("/", "/routeBase", "/appBase", "/appBase")]
fn test_context_resolution(
	#[case] path: &str,
	#[case] route_base: &str,
	#[case] app_base: &str,
	#[case] expected: &str,
) {
	let context = RouterContext::new(app_base).nest(route_base);
	assert_eq!(context.resolve(path), expected);
}

#[rstest]
#[serial(global_history)]
fn test_auto_config_shares_global_history() {
	let config = RouterConfig::new().with_history(HistoryConfig::Auto);
	let router: Router<Page> = config.build().unwrap();
	let router = router.route("/", Page::Home).route("settings", Page::Settings);

	router.navigate("/settings", NavigateOptions::new()).unwrap();

	assert_eq!(global_history().location().pathname, "/settings");
	assert_eq!(router.current().unwrap().unwrap().payload, Page::Settings);
}

#[rstest]
fn test_memory_config_is_private() {
	let config = RouterConfig::from_json(
		r#"{ "basepath": "/docs", "history": { "type": "memory", "initial_path": "/docs/intro" } }"#,
	)
	.unwrap();

	let router: Router<Page> = config.build().unwrap();
	let router = router.route("intro", Page::Home);

	assert_eq!(router.current().unwrap().unwrap().payload, Page::Home);
	assert_eq!(router.resolve_link("next"), "/docs/next");
}

#[rstest]
fn test_deep_routes_register_and_nest() {
	// Arrange
	let statics: Vec<String> = (0..40).map(|i| format!("s{}", i)).collect();
	let deep = statics.join("/");
	let router: Router<Page, MemorySource> =
		Router::new(History::new(MemorySource::new(&format!("/{}/docs/intro", deep))))
			.route(&format!("{}/*", deep), Page::Blog)
			.default_route(Page::NotFound);

	// Act
	let active = router.current().unwrap().unwrap();
	let child: Router<&str, MemorySource> = router.nest(&active).route("docs/:page", "doc");

	// Assert
	assert_eq!(active.payload, Page::Blog);
	assert_eq!(active.param("*"), Some("docs/intro"));
	let doc = child.current().unwrap().unwrap();
	assert_eq!(doc.param("page"), Some("intro"));
	assert_eq!(
		router.base_uri(&format!("{}/*", deep)).unwrap(),
		Some(format!("/{}", deep))
	);
}
