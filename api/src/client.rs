//! HTTP client for the MediaWiki Action API.

use tracing::{debug, warn};

use crate::article::{decode_pages, SearchResult};
use crate::config::WikiConfig;
use crate::error::{ApiError, Result};

#[derive(Debug, Clone)]
pub struct WikiClient {
    http: reqwest::Client,
    config: WikiConfig,
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new(WikiConfig::default())
    }
}

impl PartialEq for WikiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl WikiClient {
    pub fn new(config: WikiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Client for the Wikipedia edition matching a UI locale code.
    pub fn for_locale(code: &str) -> Self {
        Self::new(WikiConfig::for_edition(code))
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    /// Full-text search. Empty text yields no results without a request.
    pub async fn search_articles(&self, text: &str) -> Result<Vec<SearchResult>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let limit = self.config.search_limit.to_string();
        let params = [
            ("generator", "search"),
            ("gsrsearch", text),
            ("gsrlimit", limit.as_str()),
            ("gsrnamespace", "0"),
        ];
        let results = self.generator_query(&params).await?;
        debug!(query = text, hits = results.len(), "search finished");
        Ok(results)
    }

    /// `count` random main-namespace articles.
    pub async fn get_random_articles(&self, count: u32) -> Result<Vec<SearchResult>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let limit = count.to_string();
        let params = [
            ("generator", "random"),
            ("grnnamespace", "0"),
            ("grnlimit", limit.as_str()),
        ];
        self.generator_query(&params).await
    }

    async fn generator_query(&self, generator: &[(&str, &str)]) -> Result<Vec<SearchResult>> {
        let extract_chars = self.config.extract_chars.to_string();
        let thumb_size = self.config.thumbnail_size.to_string();
        let common = [
            ("action", "query"),
            ("format", "json"),
            ("formatversion", "2"),
            ("origin", "*"),
            ("prop", "extracts|pageimages"),
            ("exintro", "1"),
            ("explaintext", "1"),
            ("exlimit", "max"),
            ("exchars", extract_chars.as_str()),
            ("piprop", "thumbnail"),
            ("pithumbsize", thumb_size.as_str()),
        ];

        let response = self
            .http
            .get(self.config.api_url())
            .header("Api-User-Agent", self.config.user_agent.as_str())
            .query(&common)
            .query(generator)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "wikipedia api returned an error status");
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(decode_pages(&body)?)
    }
}
