use dioxus::prelude::*;
use tracing::warn;

use crate::components::context::use_locale;
use crate::core::locale::Locale;
use crate::i18n;

/// `EN` / `HI` buttons. Holds no state of its own: the active button is
/// whichever matches the shared locale signal.
#[component]
pub fn LanguageSwitcher() -> Element {
    let locale = use_locale();
    let current = locale();

    rsx! {
        div {
            class: "language-switcher",
            role: "group",
            "aria-label": crate::t!("nav-language-label"),
            for option in Locale::ALL {
                button {
                    key: "{option.code()}",
                    r#type: "button",
                    class: button_class(option, current),
                    lang: option.code(),
                    "aria-pressed": if option == current { "true" } else { "false" },
                    onclick: move |_| change_locale(locale, option),
                    "{option.label()}"
                }
            }
        }
    }
}

pub(crate) fn button_class(option: Locale, current: Locale) -> &'static str {
    if option == current {
        "language-switcher__button language-switcher__button--active"
    } else {
        "language-switcher__button"
    }
}

fn change_locale(mut locale: Signal<Locale>, target: Locale) {
    match i18n::set_locale(target) {
        Ok(()) => locale.set(target),
        Err(err) => warn!(%err, locale = target.code(), "locale change failed; keeping current"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_locale_is_active() {
        let active: Vec<_> = Locale::ALL
            .into_iter()
            .filter(|l| button_class(*l, Locale::Hi).ends_with("--active"))
            .collect();
        assert_eq!(active, [Locale::Hi]);
    }
}
