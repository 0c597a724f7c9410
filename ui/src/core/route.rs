//! Route vocabulary shared by the platform shells.
//!
//! The `ui` crate never sees a platform's `Route` enum. It describes where
//! it wants to go with [`NavTarget`] and reads where it is from
//! [`RouteLocation`]; each shell translates between the two.

use std::borrow::Cow;

pub const ROOT_PATH: &str = "/";
pub const DISCOVER_PATH: &str = "/discover";
/// Query parameter carrying the search text on the root route.
pub const QUERY_PARAM: &str = "q";

/// Where the navigation bar asks the router to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Root,
    Discover,
    Search(String),
}

impl NavTarget {
    /// URL form, e.g. `/?q=Albert%20Einstein`.
    pub fn href(&self) -> String {
        match self {
            NavTarget::Root => ROOT_PATH.to_string(),
            NavTarget::Discover => DISCOVER_PATH.to_string(),
            NavTarget::Search(q) => search_href(q),
        }
    }
}

pub fn search_href(query: &str) -> String {
    format!("{ROOT_PATH}?{QUERY_PARAM}={}", urlencoding::encode(query))
}

/// `/discover` toggles back to the root route; everything else goes to `/discover`.
pub fn discover_toggle_target(current_path: &str) -> NavTarget {
    if is_discover(current_path) {
        NavTarget::Root
    } else {
        NavTarget::Discover
    }
}

pub fn is_discover(path: &str) -> bool {
    path.trim_end_matches('/') == DISCOVER_PATH
}

/// The current route as seen by the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteLocation {
    pub path: String,
    /// Decoded value of the `q` parameter.
    pub query: Option<String>,
}

impl RouteLocation {
    /// `query` is taken as already decoded, which is what a typed route
    /// field holds after the router parsed the URL.
    pub fn new(path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            path: path.into(),
            query: query.filter(|q| !q.is_empty()),
        }
    }

    /// Parse a raw `"/path?a=b&q=..."` URL, decoding `q` once. Fragments are
    /// ignored.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query_string) = url.split_once('?').unwrap_or((url, ""));
        let query = query_string
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| *key == QUERY_PARAM)
            .map(|(_, value)| decode_query_value(value).into_owned());
        let path = if path.is_empty() { ROOT_PATH } else { path };
        Self::new(path, query)
    }

    pub fn is_discover(&self) -> bool {
        is_discover(&self.path)
    }

    /// Search text to adopt, unless this is the discover route.
    pub fn seed_text(&self) -> Option<String> {
        if self.is_discover() {
            return None;
        }
        self.query.clone()
    }
}

/// Percent-decode a query value (`+` is a space). Values that are not valid
/// percent-encoding, e.g. already-decoded text containing `%`, pass through.
pub fn decode_query_value(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['%', '+']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Owned(spaced),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_query_seeds_decoded_text() {
        let loc = RouteLocation::parse("/?q=Albert%20Einstein");
        assert_eq!(loc.path, "/");
        assert_eq!(loc.seed_text().as_deref(), Some("Albert Einstein"));
    }

    #[test]
    fn discover_route_never_seeds() {
        let loc = RouteLocation::parse("/discover?q=Cats");
        assert!(loc.is_discover());
        assert_eq!(loc.seed_text(), None);
    }

    #[test]
    fn empty_or_absent_query_does_not_seed() {
        assert_eq!(RouteLocation::parse("/?q=").seed_text(), None);
        assert_eq!(RouteLocation::parse("/").seed_text(), None);
        assert_eq!(RouteLocation::parse("/?other=1").seed_text(), None);
    }

    #[test]
    fn picks_q_among_other_params() {
        let loc = RouteLocation::parse("/?lang=hi&q=Taj+Mahal#top");
        assert_eq!(loc.seed_text().as_deref(), Some("Taj Mahal"));
    }

    #[test]
    fn typed_route_value_is_not_decoded_again() {
        for title in ["C++", "Google+", "1+1", "100%25 Cotton", "Albert Einstein"] {
            let loc = RouteLocation::new(ROOT_PATH, Some(title.to_string()));
            assert_eq!(loc.seed_text().as_deref(), Some(title));
        }
    }

    #[test]
    fn raw_url_is_decoded_exactly_once() {
        let loc = RouteLocation::parse(&search_href("C++"));
        assert_eq!(loc.seed_text().as_deref(), Some("C++"));
        let loc = RouteLocation::parse("/?q=100%2525");
        assert_eq!(loc.seed_text().as_deref(), Some("100%25"));
    }

    #[test]
    fn stray_percent_passes_through() {
        assert_eq!(decode_query_value("100% Cotton"), "100% Cotton");
    }

    #[test]
    fn search_href_encodes_title() {
        assert_eq!(search_href("Cats"), "/?q=Cats");
        assert_eq!(search_href("Albert Einstein"), "/?q=Albert%20Einstein");
        assert_eq!(
            NavTarget::Search("AT&T".into()).href(),
            "/?q=AT%26T"
        );
    }

    #[test]
    fn discover_toggle() {
        assert_eq!(discover_toggle_target("/discover"), NavTarget::Root);
        assert_eq!(discover_toggle_target("/discover/"), NavTarget::Root);
        assert_eq!(discover_toggle_target("/"), NavTarget::Discover);
        assert_eq!(discover_toggle_target("/anything"), NavTarget::Discover);
    }
}
