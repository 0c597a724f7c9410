use api::WikiClient;
use dioxus::prelude::*;
use tracing::warn;

use crate::components::context::{use_locale, use_nav_config};
use crate::views::home::render_body;
use crate::views::FeedBody;

/// Browse mode: a batch of random articles, reshuffled on demand.
#[component]
pub fn Discover() -> Element {
    let locale = use_locale();
    let batch = use_nav_config().discover_batch;

    let mut articles = use_resource(move || async move {
        WikiClient::for_locale(locale().code())
            .get_random_articles(batch)
            .await
            .map_err(|err| {
                warn!(%err, "discover batch failed");
                err.to_string()
            })
    });

    let body = match &*articles.read_unchecked() {
        None => FeedBody::Loading,
        Some(Err(_)) => FeedBody::Failed,
        Some(Ok(list)) if list.is_empty() => FeedBody::Empty,
        Some(Ok(list)) => FeedBody::Ready(list.clone()),
    };

    rsx! {
        section { class: "page page-discover",
            header { class: "page-discover__header",
                h1 { {crate::t!("discover-title")} }
                p { {crate::t!("discover-intro")} }
                button {
                    class: "button button--ghost",
                    r#type: "button",
                    onclick: move |_| articles.restart(),
                    {crate::t!("discover-shuffle")}
                }
            }
            {render_body(body)}
        }
    }
}
