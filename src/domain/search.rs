// SPDX-License-Identifier: MPL-2.0
//! Query and result types for stock image search.

use std::fmt;

/// Price tier a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    /// No price restriction.
    #[default]
    All,
    Free,
    Paid,
}

impl PriceFilter {
    /// All selectable values, in display order (for pick lists).
    pub const ALL: [PriceFilter; 3] = [PriceFilter::All, PriceFilter::Free, PriceFilter::Paid];

    /// The `filter` query parameter value the search service expects.
    /// `All` maps to the empty string, matching the service contract.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            PriceFilter::All => "",
            PriceFilter::Free => "free",
            PriceFilter::Paid => "paid",
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceFilter::All => write!(f, "All Prices"),
            PriceFilter::Free => write!(f, "Free"),
            PriceFilter::Paid => write!(f, "Paid"),
        }
    }
}

/// Source platform a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    /// No platform restriction.
    #[default]
    All,
    Pexels,
    Pixabay,
}

impl PlatformFilter {
    /// All selectable values, in display order (for pick lists).
    pub const ALL: [PlatformFilter; 3] = [
        PlatformFilter::All,
        PlatformFilter::Pexels,
        PlatformFilter::Pixabay,
    ];

    /// The `platform` query parameter value the search service expects.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            PlatformFilter::All => "",
            PlatformFilter::Pexels => "pexels",
            PlatformFilter::Pixabay => "pixabay",
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformFilter::All => write!(f, "All Platforms"),
            PlatformFilter::Pexels => write!(f, "Pexels"),
            PlatformFilter::Pixabay => write!(f, "Pixabay"),
        }
    }
}

/// Platform a result item came from.
///
/// Unlike [`PlatformFilter`] this has no `All`: every returned item belongs
/// to exactly one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Pexels,
    Pixabay,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Pexels => write!(f, "Pexels"),
            Platform::Pixabay => write!(f, "Pixabay"),
        }
    }
}

/// The user-controlled search parameters: term, filters, and page cursor.
///
/// This is the single source of truth for "what to search". Mutating it
/// never issues a request by itself; the app layer decides when to
/// dispatch a snapshot of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    price_filter: PriceFilter,
    platform_filter: PlatformFilter,
    page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            price_filter: PriceFilter::All,
            platform_filter: PlatformFilter::All,
            page: 1,
        }
    }
}

impl SearchQuery {
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the term is empty for validation purposes.
    /// Whitespace-only terms count as empty.
    #[must_use]
    pub fn term_is_empty(&self) -> bool {
        self.term.trim().is_empty()
    }

    #[must_use]
    pub fn price_filter(&self) -> PriceFilter {
        self.price_filter
    }

    #[must_use]
    pub fn platform_filter(&self) -> PlatformFilter {
        self.platform_filter
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// No validation happens here; an empty term is rejected only when an
    /// explicit search is triggered.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Changing the filter deliberately does not reset the page cursor.
    pub fn set_price_filter(&mut self, filter: PriceFilter) {
        self.price_filter = filter;
    }

    /// Changing the platform deliberately does not reset the page cursor.
    pub fn set_platform_filter(&mut self, filter: PlatformFilter) {
        self.platform_filter = filter;
    }

    /// Sets the page cursor. Values below 1 are rejected as a no-op.
    pub fn set_page(&mut self, page: u32) {
        if page >= 1 {
            self.page = page;
        }
    }

    /// Advances to the next page. Always allowed.
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Moves to the previous page. Returns `false` (and leaves the cursor
    /// untouched) when already at page 1.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

/// A single search hit as shown to the user.
///
/// The service guarantees no identity field; list position is the only
/// identity a result item has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    /// Preview image URI.
    pub image_url: String,
    /// Display price label as returned by the service; not validated
    /// numerically.
    pub price: String,
    pub platform: Platform,
    /// URI of the listing on the source platform.
    pub original_url: String,
}

/// One page of search results, together with the page number that was
/// requested to produce it.
///
/// The service does not echo pagination metadata, so `page` records the
/// requested cursor rather than anything cross-checked against the
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_start() {
        let query = SearchQuery::default();
        assert_eq!(query.term(), "");
        assert_eq!(query.price_filter(), PriceFilter::All);
        assert_eq!(query.platform_filter(), PlatformFilter::All);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn set_page_rejects_zero() {
        let mut query = SearchQuery::default();
        query.set_page(3);
        query.set_page(0);
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn previous_page_is_noop_at_floor() {
        let mut query = SearchQuery::default();
        assert!(!query.previous_page());
        assert_eq!(query.page(), 1);

        query.next_page();
        assert!(query.previous_page());
        assert_eq!(query.page(), 1);
        // Repeated Previous can never push the cursor below 1.
        for _ in 0..5 {
            query.previous_page();
        }
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn filter_changes_keep_the_page_cursor() {
        let mut query = SearchQuery::default();
        query.set_page(4);
        query.set_term("beach");
        query.set_price_filter(PriceFilter::Free);
        query.set_platform_filter(PlatformFilter::Pixabay);
        assert_eq!(query.page(), 4);
    }

    #[test]
    fn whitespace_only_term_counts_as_empty() {
        let mut query = SearchQuery::default();
        query.set_term("   ");
        assert!(query.term_is_empty());
        query.set_term(" beach ");
        assert!(!query.term_is_empty());
    }

    #[test]
    fn filters_map_to_service_parameters() {
        assert_eq!(PriceFilter::All.as_param(), "");
        assert_eq!(PriceFilter::Free.as_param(), "free");
        assert_eq!(PriceFilter::Paid.as_param(), "paid");
        assert_eq!(PlatformFilter::All.as_param(), "");
        assert_eq!(PlatformFilter::Pexels.as_param(), "pexels");
        assert_eq!(PlatformFilter::Pixabay.as_param(), "pixabay");
    }
}
