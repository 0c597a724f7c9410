//! Typed payload handed from the navigation bar to the feed views.
//!
//! Travels alongside a route change through the app-level `FeedChannel`
//! context instead of ambient history state.

use api::SearchResult;

use super::route::NavTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPayload {
    /// Search text the articles belong to (the `q` of the target route).
    pub query: String,
    pub articles: Vec<SearchResult>,
}

impl FeedPayload {
    pub fn matches(&self, query: &str) -> bool {
        self.query == query
    }
}

/// Take `pending` if it belongs to `query`. A payload for a different query
/// stays put for the view it was meant for.
pub fn take_matching(pending: &mut Option<FeedPayload>, query: &str) -> Option<FeedPayload> {
    if pending.as_ref().is_some_and(|payload| payload.matches(query)) {
        pending.take()
    } else {
        None
    }
}

/// The list last handed over to the root feed.
///
/// Publishing for the query the feed already shows does not change the
/// route, so the feed keeps receiving for as long as it is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandedFeed {
    current: Option<FeedPayload>,
}

impl HandedFeed {
    /// Move a payload for `query` out of `pending`. Returns whether one was taken.
    pub fn receive(&mut self, pending: &mut Option<FeedPayload>, query: &str) -> bool {
        match take_matching(pending, query) {
            Some(payload) => {
                self.current = Some(payload);
                true
            }
            None => false,
        }
    }

    /// Handed-over articles, if they belong to `query`.
    pub fn articles_for(&self, query: &str) -> Option<&[SearchResult]> {
        self.current
            .as_ref()
            .filter(|payload| payload.matches(query))
            .map(|payload| payload.articles.as_slice())
    }
}

/// A route change plus the payload the destination should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavIntent {
    pub target: NavTarget,
    pub payload: FeedPayload,
}

impl NavIntent {
    /// Search route for `query`, carrying `articles`.
    pub fn search(query: impl Into<String>, articles: Vec<SearchResult>) -> Self {
        let query = query.into();
        Self {
            target: NavTarget::Search(query.clone()),
            payload: FeedPayload { query, articles },
        }
    }
}

/// Intent for a batch of random articles: open the first, keep all three.
/// `None` when the batch is empty.
pub fn random_intent(articles: Vec<SearchResult>) -> Option<NavIntent> {
    let first = articles.first()?.title.clone();
    Some(NavIntent::search(first, articles))
}
