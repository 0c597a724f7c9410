//! Endpoint and request tuning for [`WikiClient`](crate::WikiClient).

use serde::{Deserialize, Serialize};

/// Wikipedia edition used when no locale is given.
pub const DEFAULT_EDITION: &str = "en";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// Language edition (`en`, `hi`, ...); substituted into `endpoint`.
    pub edition: String,
    /// Action API URL template. `{edition}` is replaced with [`Self::edition`].
    pub endpoint: String,
    /// Sent as `Api-User-Agent`, which browsers allow where `User-Agent` is blocked.
    pub user_agent: String,
    pub search_limit: u32,
    /// Maximum characters of intro text per article.
    pub extract_chars: u32,
    pub thumbnail_size: u32,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            edition: DEFAULT_EDITION.to_string(),
            endpoint: "https://{edition}.wikipedia.org/w/api.php".to_string(),
            user_agent: format!("WikTok/{} (https://github.com/wiktok/wiktok)", env!("CARGO_PKG_VERSION")),
            search_limit: 20,
            extract_chars: 200,
            thumbnail_size: 400,
        }
    }
}

impl WikiConfig {
    pub fn for_edition(edition: impl Into<String>) -> Self {
        Self {
            edition: edition.into(),
            ..Self::default()
        }
    }

    /// Resolved Action API URL for the configured edition.
    pub fn api_url(&self) -> String {
        let edition = if self.edition.trim().is_empty() {
            DEFAULT_EDITION
        } else {
            self.edition.trim()
        };
        self.endpoint.replace("{edition}", edition)
    }
}
