use api::WikiClient;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::components::context::{use_feed_channel, use_locale};
use crate::core::handoff::HandedFeed;
use crate::views::article_card::ArticleFeed;
use crate::views::FeedBody;

/// Search-driven feed on the root route.
///
/// Renders the list handed over by the navigation bar when it matches `q`;
/// otherwise (deep link, reload) runs the search itself.
#[component]
pub fn Home(q: String) -> Element {
    let locale = use_locale();
    let feed = use_feed_channel();
    let handed = use_signal(HandedFeed::default);

    // Picks up hand-overs for the current `q`, including ones published
    // while this route is already showing it.
    use_effect(use_reactive((&q,), move |(q,)| {
        if feed.deliver(handed, &q) {
            debug!(query = %q, "feed taken from navigation");
        }
    }));

    let articles = use_resource(use_reactive((&q,), move |(q,)| async move {
        if q.is_empty() || feed.pending_for(&q) || handed.peek().articles_for(&q).is_some() {
            return Ok(Vec::new());
        }
        WikiClient::for_locale(locale().code())
            .search_articles(&q)
            .await
            .map_err(|err| {
                warn!(%err, query = %q, "feed search failed");
                err.to_string()
            })
    }));

    let body = match handed.read().articles_for(&q) {
        Some([]) => FeedBody::Empty,
        Some(list) => FeedBody::Ready(list.to_vec()),
        None => match &*articles.read_unchecked() {
            None => FeedBody::Loading,
            Some(Err(_)) => FeedBody::Failed,
            Some(Ok(list)) if list.is_empty() => FeedBody::Empty,
            Some(Ok(list)) => FeedBody::Ready(list.clone()),
        },
    };

    rsx! {
        section { class: "page page-home",
            {render_body(body)}
        }
    }
}

pub(crate) fn render_body(body: FeedBody) -> Element {
    match body {
        FeedBody::Loading => rsx! { p { class: "page__status", {crate::t!("feed-loading")} } },
        FeedBody::Failed => rsx! { p { class: "page__status page__status--error", {crate::t!("feed-error")} } },
        FeedBody::Empty => rsx! { p { class: "page__status", {crate::t!("feed-empty")} } },
        FeedBody::Ready(articles) => rsx! { ArticleFeed { articles } },
    }
}
