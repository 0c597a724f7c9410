//! Shared UI crate for WikTok: the navigation bar, its search dialog, the
//! language switcher and the feed views. Platform shells (`web`, `desktop`)
//! only add a `Route` enum and launch.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod command_dialog;
    pub mod context;
    pub mod icons;
    pub mod language_switcher;
    pub mod navigation;
    pub mod toast_host;

    pub use command_dialog::CommandDialog;
    pub use context::{use_app_context, use_feed_channel, use_locale, use_toaster};
    pub use language_switcher::LanguageSwitcher;
    pub use navigation::{register_routes, Navigation, RouteBridge};
    pub use toast_host::ToastHost;
}

use dioxus::prelude::manganis;

/// Shared theme stylesheet for shells that link assets (web).
pub const THEME_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
