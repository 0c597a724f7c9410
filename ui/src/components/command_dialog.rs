use api::SearchResult;
use dioxus::prelude::*;

use crate::components::icons::SearchIcon;
use crate::core::locale::Locale;
use crate::core::nav_state::SearchStatus;
use crate::t;

/// Command-palette style search overlay.
///
/// Fully controlled: the parent owns `open` and `value` and is told about
/// every change. Overlay click, the close button and `Escape` all report
/// `on_open_change(false)`.
#[component]
pub fn CommandDialog(
    open: bool,
    value: String,
    status: SearchStatus,
    // Re-render trigger for language changes; also sets `lang`.
    locale: Locale,
    on_open_change: EventHandler<bool>,
    on_value_change: EventHandler<String>,
    on_select: EventHandler<SearchResult>,
) -> Element {
    if !open {
        return rsx! {};
    }

    let placeholder = t!("search-articles-placeholder");
    let close_label = t!("dialog-close");

    rsx! {
        div {
            class: "command-dialog__overlay",
            lang: locale.code(),
            onclick: move |_| on_open_change.call(false),
            div {
                class: "command-dialog",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        on_open_change.call(false);
                    }
                },
                div { class: "command-dialog__input-row",
                    SearchIcon { class: "command-dialog__input-icon" }
                    input {
                        class: "command-dialog__input",
                        r#type: "search",
                        autofocus: true,
                        placeholder: "{placeholder}",
                        value: "{value}",
                        oninput: move |evt| on_value_change.call(evt.value()),
                    }
                    button {
                        class: "command-dialog__close",
                        r#type: "button",
                        "aria-label": "{close_label}",
                        onclick: move |_| on_open_change.call(false),
                        "×"
                    }
                }
                div { class: "command-dialog__list",
                    {render_status(status, on_select)}
                }
            }
        }
    }
}

fn render_status(status: SearchStatus, on_select: EventHandler<SearchResult>) -> Element {
    match status {
        SearchStatus::Idle => rsx! {
            p { class: "command-dialog__empty", {t!("start-typing-to-search")} }
        },
        SearchStatus::Loading => rsx! {
            p { class: "command-dialog__empty", {t!("searching")} }
        },
        SearchStatus::Failed | SearchStatus::Empty => rsx! {
            p { class: "command-dialog__empty", {t!("no-results-found")} }
        },
        SearchStatus::Ready(results) => rsx! {
            section { class: "command-dialog__group",
                h3 { class: "command-dialog__group-heading", {t!("articles")} }
                ul { class: "command-dialog__items",
                    for result in results {
                        {render_result_row(result, on_select)}
                    }
                }
            }
        },
    }
}

fn render_result_row(result: SearchResult, on_select: EventHandler<SearchResult>) -> Element {
    let SearchResult {
        id,
        title,
        content,
        image,
    } = result.clone();

    rsx! {
        li { key: "{id}", class: "command-dialog__item",
            button {
                class: "command-dialog__item-button",
                r#type: "button",
                onclick: move |_| on_select.call(result.clone()),
                if let Some(src) = image {
                    img {
                        class: "command-dialog__thumb",
                        src: "{src}",
                        alt: "{title}",
                    }
                }
                div { class: "command-dialog__item-text",
                    div { class: "command-dialog__item-title", "{title}" }
                    div { class: "command-dialog__item-excerpt", "{content}" }
                }
            }
        }
    }
}
