//! Wikipedia service boundary for WikTok.
//!
//! The UI only ever talks to Wikipedia through this crate:
//! - [`WikiClient::search_articles`] for the command dialog
//! - [`WikiClient::get_random_articles`] for the brand "surprise me" action
//!
//! Both go through the MediaWiki Action API (`/w/api.php`) with a page
//! generator, so a single request returns titles, intro extracts and
//! thumbnails together.

pub mod article;
pub mod client;
pub mod config;
pub mod error;

pub use article::SearchResult;
pub use client::WikiClient;
pub use config::WikiConfig;
pub use error::ApiError;
