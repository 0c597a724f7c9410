mod article_card;
pub use article_card::{ArticleCard, ArticleFeed};

mod discover;
pub use discover::Discover;

mod home;
pub use home::Home;

use api::SearchResult;

/// What a feed view currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FeedBody {
    Loading,
    Failed,
    Empty,
    Ready(Vec<SearchResult>),
}
