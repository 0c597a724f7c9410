//! Tunables for the navigation bar and feed views.

use serde::{Deserialize, Serialize};

/// Runtime configuration shared through Dioxus context.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// How long loading toasts stay on screen.
    pub toast_duration_ms: u64,
    /// Articles requested by the brand "random article" action.
    pub random_count: u32,
    /// Articles shown per batch on the discover page.
    pub discover_batch: u32,
    /// Retention of settled search results. Results are refetched only
    /// once this window has passed.
    pub search_cache_ms: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 2_000,
            random_count: 3,
            discover_batch: 6,
            search_cache_ms: 5.0 * 60.0 * 1_000.0,
        }
    }
}

impl NavConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
