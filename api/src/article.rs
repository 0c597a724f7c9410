//! Article records returned by search and random lookups.

use serde::{Deserialize, Serialize};

/// One article as shown in the search dialog and the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// MediaWiki page id (unique per edition).
    pub id: u64,
    pub title: String,
    /// Plain-text intro excerpt; empty when the page has none.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SearchResult {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            image: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Raw page shape of a `formatversion=2` generator response.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPage {
    pub pageid: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<RawThumbnail>,
    #[serde(default)]
    pub missing: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawThumbnail {
    pub source: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawQuery {
    #[serde(default)]
    pub pages: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawResponse {
    #[serde(default)]
    pub query: Option<RawQuery>,
}

impl RawPage {
    fn into_result(self) -> Option<SearchResult> {
        if self.missing {
            return None;
        }
        let id = self.pageid?;
        Some(SearchResult {
            id,
            title: self.title,
            content: self.extract.map(|e| e.trim().to_string()).unwrap_or_default(),
            image: self.thumbnail.map(|t| t.source),
        })
    }
}

/// Decode a generator response body into display records.
///
/// Pages carrying a search `index` are ordered by it; pages without one keep
/// the order the API returned them in. A body without `query` means no hits.
pub fn decode_pages(body: &str) -> Result<Vec<SearchResult>, serde_json::Error> {
    let raw: RawResponse = serde_json::from_str(body)?;
    let mut pages = raw.query.unwrap_or_default().pages;
    pages.sort_by_key(|p| p.index.unwrap_or(u32::MAX));
    Ok(pages.into_iter().filter_map(RawPage::into_result).collect())
}
