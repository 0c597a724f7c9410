//! Supported display locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Display language of the UI. Only English and Hindi are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    /// Switcher order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Hi];

    /// Two-letter code; also the i18n folder name and the Wikipedia edition.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Hi => "HI",
        }
    }

    /// Accepts bare codes and full tags (`hi-IN`), case-insensitively.
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "hi" => Some(Locale::Hi),
            _ => None,
        }
    }

    pub fn language_id(&self) -> LanguageIdentifier {
        match self {
            Locale::En => unic_langid::langid!("en"),
            Locale::Hi => unic_langid::langid!("hi"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| format!("Unsupported locale: {s}. Use one of: en, hi"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_from_code() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn region_tags_map_to_language() {
        assert_eq!(Locale::from_code("hi-IN"), Some(Locale::Hi));
        assert_eq!(Locale::from_code("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr-FR"), None);
        let german: Result<Locale, _> = "de".parse();
        assert!(german.is_err());
    }

    #[test]
    fn labels_are_uppercase_codes() {
        assert_eq!(Locale::En.label(), "EN");
        assert_eq!(Locale::Hi.label(), "HI");
    }
}
