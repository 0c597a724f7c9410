//! Internationalization (i18n) support for `wiktok-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/wiktok-ui.ftl   (fallback/reference)
//!   hi/wiktok-ui.ftl   (Hindi)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("search-articles");
//! let toast = t!("loading-articles-desc", title = "Cats");
//! ```
//!
//! The UI offers exactly the locales in [`Locale::ALL`]; the embedded folder
//! names match [`Locale::code`]. Components never hold the language
//! themselves: they read [`current_locale`] (or the `Signal<Locale>` context
//! mirroring it) and request changes through [`set_locale`].
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (we enable `debug-embed` feature in that target-specific dependency section).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::core::locale::Locale;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("search-articles")
///     t!("loading-articles-desc", title = "Cats")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
const DOMAIN: &str = "wiktok-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| new_loader(Locale::default()));

static INIT: Once = Once::new();

fn new_loader(fallback: Locale) -> FluentLanguageLoader {
    FluentLanguageLoader::new(DOMAIN, fallback.language_id())
}

/// Initialize i18n (idempotent).
///
/// Picks the first requested system/browser language that maps onto a
/// supported [`Locale`], falling back to English.
pub fn init() {
    INIT.call_once(|| {
        let preferred = requested_languages()
            .iter()
            .find_map(|lang| Locale::from_code(lang.language.as_str()))
            .unwrap_or_default();
        if let Err(err) = select(&LOADER, preferred) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch the UI to `locale`.
pub fn set_locale(locale: Locale) -> Result<(), I18nEmbedError> {
    init();
    select(&LOADER, locale)?;
    debug!(locale = locale.code(), "locale changed");
    Ok(())
}

/// Switch language at runtime by tag. Tags outside [`Locale::ALL`] are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    match Locale::from_code(tag) {
        Some(locale) => set_locale(locale),
        None => Ok(()), // Silently ignore unsupported tags.
    }
}

/// The locale currently selected in [`LOADER`].
pub fn current_locale() -> Locale {
    init();
    LOADER
        .current_languages()
        .first()
        .and_then(|lang| Locale::from_code(lang.language.as_str()))
        .unwrap_or_default()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

fn select(loader: &FluentLanguageLoader, locale: Locale) -> Result<(), I18nEmbedError> {
    let requested: [LanguageIdentifier; 1] = [locale.language_id()];
    i18n_embed::select(loader, &Localizations, &requested)?;
    // Plain output: no Unicode isolation marks around `{ $title }`.
    loader.set_use_isolating(false);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn every_locale_is_embedded() {
        let langs = available_languages();
        for locale in Locale::ALL {
            assert!(langs.iter().any(|l| l == locale.code()), "{locale} missing");
        }
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let loader = new_loader(Locale::En);
        select(&loader, Locale::En).unwrap();
        assert_eq!(fl!(loader, "search-articles"), "Search articles");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let loader = new_loader(Locale::En);
        select(&loader, Locale::En).unwrap();
        let s = fl!(loader, "loading-articles-desc", title = "Cats");
        assert_eq!(s, "Loading articles about Cats...");
    }

    #[test]
    fn hindi_bundle_loads() {
        let loader = new_loader(Locale::En);
        select(&loader, Locale::Hi).unwrap();
        assert_eq!(fl!(loader, "articles"), "लेख");
    }

    #[test]
    fn unsupported_tag_is_ignored() {
        init();
        let before = current_locale();
        assert!(set_language("zz-ZZ").is_ok());
        assert_eq!(current_locale(), before);
    }
}
