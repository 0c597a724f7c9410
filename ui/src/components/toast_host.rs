use dioxus::prelude::*;

use crate::components::context::use_toaster;

/// Bottom-corner stack of active toasts.
#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let queue = toaster.queue();
    let toasts = queue.read().items().to_vec();

    rsx! {
        div { class: "toast-host", "aria-live": "polite",
            for toast in toasts {
                div { key: "{toast.id}", class: "toast", role: "status",
                    div { class: "toast__body",
                        p { class: "toast__title", "{toast.title}" }
                        if !toast.description.is_empty() {
                            p { class: "toast__description", "{toast.description}" }
                        }
                    }
                    button {
                        class: "toast__dismiss",
                        r#type: "button",
                        "aria-label": crate::t!("toast-dismiss"),
                        onclick: move |_| toaster.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
