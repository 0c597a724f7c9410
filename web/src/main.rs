use dioxus::prelude::*;

use ui::components::{register_routes, use_app_context, Navigation, RouteBridge, ToastHost};
use ui::core::config::NavConfig;
use ui::core::route::{NavTarget, RouteLocation, DISCOVER_PATH, ROOT_PATH};
use ui::views::{Discover, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/?:q")]
    Home { q: String },
    #[route("/discover")]
    Discover {},
}

impl Route {
    fn location(&self) -> RouteLocation {
        match self {
            Route::Home { q } => RouteLocation::new(ROOT_PATH, Some(q.clone())),
            Route::Discover {} => RouteLocation::new(DISCOVER_PATH, None),
        }
    }
}

fn navigate(target: NavTarget) {
    let route = match target {
        NavTarget::Root => Route::Home { q: String::new() },
        NavTarget::Discover => Route::Discover {},
        NavTarget::Search(q) => Route::Home { q },
    };
    navigator().push(route);
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let locale = use_app_context(NavConfig::default());
    register_routes(RouteBridge { navigate });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "WikTok" }

        // Hidden marker keeps an explicit reactive dependency on the locale.
        div { style: "display:none", "{locale()}" }
        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `Navigation` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Navigation { location: route.location() }
        main { class: "app-main", Outlet::<Route> {} }
        ToastHost {}
    }
}
