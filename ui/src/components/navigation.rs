use api::{SearchResult, WikiClient};
use dioxus::prelude::*;
use futures_util::StreamExt;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::components::command_dialog::CommandDialog;
use crate::components::context::{
    use_feed_channel, use_locale, use_nav_config, use_toaster, FeedChannel,
};
use crate::components::icons::{CompassIcon, SearchIcon};
use crate::components::language_switcher::LanguageSwitcher;
use crate::core::handoff::{random_intent, NavIntent};
use crate::core::nav_state::{NavState, SearchStatus};
use crate::core::query_cache::QueryCache;
use crate::core::route::{NavTarget, RouteLocation};
use crate::core::timing;
use crate::t;

// Navigation stylesheet
const NAVIGATION_CSS: Asset = asset!("/assets/styling/navigation.css");
const NAVIGATION_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navigation.css"
));

/// Platforms register a `RouteBridge` so `Navigation` can change routes
/// without knowing each platform's `Route` enum.
///
/// Example (in platform crate):
/// ```ignore
/// use ui::components::navigation::{register_routes, RouteBridge};
/// use ui::core::route::NavTarget;
///
/// fn navigate(target: NavTarget) {
///     let route = match target {
///         NavTarget::Root => Route::Home { q: String::new() },
///         NavTarget::Discover => Route::Discover {},
///         NavTarget::Search(q) => Route::Home { q },
///     };
///     navigator().push(route);
/// }
///
/// register_routes(RouteBridge { navigate });
/// ```
pub struct RouteBridge {
    pub navigate: fn(NavTarget),
}

static ROUTE_BRIDGE: OnceCell<RouteBridge> = OnceCell::new();

pub fn register_routes(bridge: RouteBridge) {
    let _ = ROUTE_BRIDGE.set(bridge);
}

fn go(target: NavTarget) {
    match ROUTE_BRIDGE.get() {
        Some(bridge) => {
            debug!(href = %target.href(), "navigating");
            (bridge.navigate)(target);
        }
        None => warn!(href = %target.href(), "no route bridge registered; navigation dropped"),
    }
}

#[derive(Debug, Clone)]
enum NavEvent {
    Select(SearchResult),
    Random,
}

/// Fixed top bar: brand (random article), search trigger, language switcher
/// and discover toggle, plus the search dialog it opens.
#[component]
pub fn Navigation(location: RouteLocation) -> Element {
    crate::i18n::init();

    let config = use_nav_config();
    let locale = use_locale();
    let feed = use_feed_channel();
    let toaster = use_toaster();

    let mut nav = use_signal(NavState::default);
    let mut cache = use_signal(|| QueryCache::<Vec<SearchResult>>::new(config.search_cache_ms));
    let client = use_memo(move || WikiClient::for_locale(locale().code()));
    let search_text = use_memo(move || nav.read().search_text().to_string());

    // Deep link: adopt `q` whenever the route changes.
    use_effect(use_reactive((&location,), move |(location,)| {
        if nav.with_mut(|state| state.seed_from_location(&location)) {
            debug!(text = %nav.peek().search_text(), "search text seeded from url");
        }
    }));

    // One request per distinct text while its result is retained.
    use_effect(move || {
        let text = search_text();
        let client = client();
        cache.write().rescope(&client.config().edition);
        if text.is_empty() {
            return;
        }
        let Some(ticket) = cache.write().begin(&text, timing::now_ms()) else {
            return;
        };
        spawn(async move {
            let outcome = client.search_articles(&text).await.map_err(|err| {
                warn!(%err, query = %text, "search failed");
                err.to_string()
            });
            let now = timing::now_ms();
            let mut entries = cache.write();
            entries.settle(ticket, outcome, now);
            entries.evict_expired(now);
        });
    });

    let status = use_memo(move || {
        let text = search_text();
        let state = cache.read().state(&text, timing::now_ms());
        SearchStatus::resolve(&text, state)
    });

    let actions = {
        let config = config.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<NavEvent>| {
            let config = config.clone();
            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        NavEvent::Select(article) => {
                            let intent = {
                                let current = status.peek();
                                nav.with_mut(|state| state.select_result(&article, current.results()))
                            };
                            toaster.show(
                                t!("loading-articles"),
                                t!("loading-articles-desc", title = article.title.clone()),
                                config.toast_duration_ms,
                            );
                            follow(intent, feed);
                        }
                        NavEvent::Random => {
                            nav.with_mut(NavState::begin_random);
                            toaster.show(
                                t!("loading-random-article"),
                                t!("finding-something-interesting"),
                                config.toast_duration_ms,
                            );
                            let client = client.peek().clone();
                            match client.get_random_articles(config.random_count).await {
                                Ok(articles) => {
                                    if let Some(intent) = random_intent(articles) {
                                        follow(intent, feed);
                                    }
                                }
                                Err(err) => warn!(%err, "random article lookup failed"),
                            }
                        }
                    }
                }
            }
        })
    };

    let on_discover = location.is_discover();
    let current_path = location.path.clone();
    let toggle_discover = move |_| {
        let target = nav.with_mut(|state| state.toggle_discover(&current_path));
        go(target);
    };

    let state = nav();
    let current_locale = locale();
    let trigger_label = if state.search_text().is_empty() {
        t!("search-articles")
    } else {
        state.search_text().to_string()
    };

    rsx! {
        // Include navigation stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVIGATION_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVIGATION_CSS_INLINE}" }
        }

        header {
            id: "navigation",
            class: if on_discover { "navigation navigation--discover" } else { "navigation" },
            lang: current_locale.code(),

            button {
                class: "navigation__brand",
                r#type: "button",
                onclick: move |_| actions.send(NavEvent::Random),
                {t!("wik-tok")}
            }

            button {
                class: "navigation__search",
                r#type: "button",
                onclick: move |_| nav.with_mut(NavState::open_dialog),
                SearchIcon { class: "navigation__search-icon" }
                span { class: "navigation__search-label", "{trigger_label}" }
            }

            div { class: "navigation__actions",
                LanguageSwitcher {}
                button {
                    class: if on_discover { "navigation__discover navigation__discover--active" } else { "navigation__discover" },
                    r#type: "button",
                    "aria-label": t!("nav-discover"),
                    "aria-pressed": if on_discover { "true" } else { "false" },
                    onclick: toggle_discover,
                    CompassIcon { class: "navigation__discover-icon" }
                }
            }
        }

        CommandDialog {
            open: state.dialog_open(),
            value: state.search_text().to_string(),
            status: status(),
            locale: current_locale,
            on_open_change: move |open: bool| nav.with_mut(|state| state.set_dialog_open(open)),
            on_value_change: move |text: String| nav.with_mut(|state| state.set_search_text(text)),
            on_select: move |article: SearchResult| actions.send(NavEvent::Select(article)),
        }
    }
}

fn follow(intent: NavIntent, feed: FeedChannel) {
    feed.publish(intent.payload);
    go(intent.target);
}
