#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::{Path, PathBuf};

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_routes, use_app_context, Navigation, RouteBridge, ToastHost};
use ui::core::config::NavConfig;
use ui::core::route::{NavTarget, RouteLocation, DISCOVER_PATH, ROOT_PATH};
use ui::views::{Discover, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

/// Optional overrides read from the resource directory at startup.
#[cfg(feature = "desktop")]
const CONFIG_FILE: &str = "wiktok.json";

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();
    let config = load_config(&resource_dir);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("WikTok – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(480.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn navigate(target: NavTarget) {
    let route = match target {
        NavTarget::Root => Route::Home { q: String::new() },
        NavTarget::Discover => Route::Discover {},
        NavTarget::Search(q) => Route::Home { q },
    };
    navigator().push(route);
}

#[component]
fn App() -> Element {
    let config = try_use_context::<NavConfig>().unwrap_or_default();
    let locale = use_app_context(config);

    register_routes(RouteBridge { navigate });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div to force full remount on language change and include a hidden
        // reactive marker so we always depend on the locale signal.
        div {
            key: "{locale()}",
            div { style: "display:none", "{locale()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[cfg(feature = "desktop")]
fn load_config(resource_dir: &Path) -> NavConfig {
    let path = resource_dir.join(CONFIG_FILE);
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return NavConfig::default();
    };
    NavConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!(%err, path = %path.display(), "ignoring malformed config");
        NavConfig::default()
    })
}

/// A desktop-specific layout around the shared `Navigation` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        Navigation { location: route.location() }
        main { class: "app-main", Outlet::<Route> {} }
        ToastHost {}
    }
}
