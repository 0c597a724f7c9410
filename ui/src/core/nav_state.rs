//! Local state of one navigation bar: dialog visibility and search text.
//!
//! All mutations go through [`NavState`] so the close-clears-text rule holds
//! no matter which handler closed the dialog.

use api::SearchResult;

use super::handoff::NavIntent;
use super::query_cache::QueryState;
use super::route::{discover_toggle_target, NavTarget, RouteLocation};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    dialog_open: bool,
    search_text: String,
}

impl NavState {
    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Closing always clears the search text.
    pub fn set_dialog_open(&mut self, open: bool) {
        self.dialog_open = open;
        if !open {
            self.search_text.clear();
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    /// Adopt the `q` parameter of a non-discover route. Returns whether the
    /// text changed.
    pub fn seed_from_location(&mut self, location: &RouteLocation) -> bool {
        match location.seed_text() {
            Some(text) if text != self.search_text => {
                self.search_text = text;
                true
            }
            _ => false,
        }
    }

    /// Close the dialog, show the chosen title in the bar and build the
    /// route change with `selected` moved to the front of `last_results`.
    pub fn select_result(
        &mut self,
        selected: &SearchResult,
        last_results: &[SearchResult],
    ) -> NavIntent {
        self.set_dialog_open(false);
        self.search_text = selected.title.clone();
        NavIntent::search(
            selected.title.clone(),
            reorder_results(selected, last_results),
        )
    }

    /// The random-article action starts from an empty search.
    pub fn begin_random(&mut self) {
        self.clear_search();
    }

    pub fn toggle_discover(&mut self, current_path: &str) -> NavTarget {
        self.clear_search();
        discover_toggle_target(current_path)
    }
}

/// `selected` first, then every other result in its original order.
pub fn reorder_results(selected: &SearchResult, results: &[SearchResult]) -> Vec<SearchResult> {
    std::iter::once(selected.clone())
        .chain(results.iter().filter(|r| r.id != selected.id).cloned())
        .collect()
}

/// What the command dialog body shows for the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// No text typed yet.
    Idle,
    /// Request in flight (or about to start) with nothing cached.
    Loading,
    /// Request failed; rendered like an empty result.
    Failed,
    Empty,
    Ready(Vec<SearchResult>),
}

impl SearchStatus {
    pub fn resolve(text: &str, state: QueryState<Vec<SearchResult>>) -> Self {
        if text.is_empty() {
            return SearchStatus::Idle;
        }
        match state {
            QueryState::Missing | QueryState::Pending => SearchStatus::Loading,
            QueryState::Failed(_) => SearchStatus::Failed,
            QueryState::Ready(results) if results.is_empty() => SearchStatus::Empty,
            QueryState::Ready(results) => SearchStatus::Ready(results),
        }
    }

    /// Results currently on screen, if any.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchStatus::Ready(results) => results,
            _ => &[],
        }
    }

    pub fn shows_no_results(&self) -> bool {
        matches!(self, SearchStatus::Failed | SearchStatus::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> SearchResult {
        SearchResult::new(3, "Cats")
    }

    #[test]
    fn closing_clears_text() {
        let mut state = NavState::default();
        state.open_dialog();
        state.set_search_text("Einstein");
        state.set_dialog_open(false);
        assert!(!state.dialog_open());
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn opening_keeps_text() {
        let mut state = NavState::default();
        state.set_search_text("Einstein");
        state.set_dialog_open(true);
        assert_eq!(state.search_text(), "Einstein");
    }

    #[test]
    fn selecting_moves_result_to_front() {
        let mut state = NavState::default();
        state.open_dialog();
        state.set_search_text("cat");
        let results = vec![SearchResult::new(1, "Cat"), cats()];

        let intent = state.select_result(&cats(), &results);

        assert_eq!(intent.payload.articles, vec![cats(), SearchResult::new(1, "Cat")]);
        assert_eq!(intent.target.href(), "/?q=Cats");
        assert!(!state.dialog_open());
        assert_eq!(state.search_text(), "Cats");
    }

    #[test]
    fn reorder_preserves_relative_order_of_rest() {
        let results: Vec<_> = (1..=5).map(|id| SearchResult::new(id, format!("A{id}"))).collect();
        let reordered = reorder_results(&results[3], &results);
        let ids: Vec<_> = reordered.iter().map(|r| r.id).collect();
        assert_eq!(ids, [4, 1, 2, 3, 5]);
    }

    #[test]
    fn reorder_with_unknown_selection_prepends_it() {
        let results = vec![SearchResult::new(1, "A")];
        let reordered = reorder_results(&cats(), &results);
        assert_eq!(reordered, vec![cats(), SearchResult::new(1, "A")]);
        assert_eq!(reorder_results(&cats(), &[]), vec![cats()]);
    }

    #[test]
    fn seeds_from_root_route_only() {
        let mut state = NavState::default();
        assert!(state.seed_from_location(&RouteLocation::parse("/?q=Albert%20Einstein")));
        assert_eq!(state.search_text(), "Albert Einstein");
        assert!(!state.seed_from_location(&RouteLocation::parse("/?q=Albert%20Einstein")));

        let mut state = NavState::default();
        assert!(!state.seed_from_location(&RouteLocation::parse("/discover?q=Cats")));
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn selected_title_survives_the_route_it_pushes() {
        let mut state = NavState::default();
        state.open_dialog();
        state.set_search_text("c+");
        let cpp = SearchResult::new(72038, "C++");
        let intent = state.select_result(&cpp, &[cpp.clone()]);

        // The shell hands the typed `q` back as a location.
        let NavTarget::Search(q) = intent.target else {
            panic!("select targets a search route");
        };
        let location = RouteLocation::new("/", Some(q));
        assert!(!state.seed_from_location(&location));
        assert_eq!(state.search_text(), "C++");
    }

    #[test]
    fn discover_toggle_clears_text() {
        let mut state = NavState::default();
        state.set_search_text("Cats");
        assert_eq!(state.toggle_discover("/"), NavTarget::Discover);
        assert_eq!(state.search_text(), "");
        assert_eq!(state.toggle_discover("/discover"), NavTarget::Root);
    }

    #[test]
    fn random_clears_text() {
        let mut state = NavState::default();
        state.set_search_text("Cats");
        state.begin_random();
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn status_resolution() {
        assert_eq!(SearchStatus::resolve("", QueryState::Ready(vec![cats()])), SearchStatus::Idle);
        assert_eq!(SearchStatus::resolve("c", QueryState::Missing), SearchStatus::Loading);
        assert_eq!(SearchStatus::resolve("c", QueryState::Pending), SearchStatus::Loading);
        assert_eq!(
            SearchStatus::resolve("c", QueryState::Failed("offline".into())),
            SearchStatus::Failed
        );
        assert_eq!(SearchStatus::resolve("c", QueryState::Ready(vec![])), SearchStatus::Empty);
        let ready = SearchStatus::resolve("c", QueryState::Ready(vec![cats()]));
        assert_eq!(ready.results(), &[cats()]);
        assert!(SearchStatus::Failed.shows_no_results());
        assert!(!ready.shows_no_results());
    }
}
