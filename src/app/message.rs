// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::search::SearchError;
use crate::domain::{PlatformFilter, PriceFilter, ResultPage};

/// Top-level messages consumed by `App::update`. Every mutation path of the
/// search state is one of these variants, so the whole controller can be
/// exercised message by message in tests.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search input changed. Updates state only; never dispatches.
    TermChanged(String),
    /// The price filter pick list changed. Does not reset the page cursor.
    PriceFilterChanged(PriceFilter),
    /// The platform filter pick list changed. Does not reset the page cursor.
    PlatformFilterChanged(PlatformFilter),
    /// Explicit search trigger (button or Enter in the input). Rejected
    /// with a validation notice when the term is empty.
    SearchRequested,
    /// Advance one page and search. Deliberately skips the empty-term guard.
    NextPagePressed,
    /// Go back one page and search; a no-op at page 1.
    PreviousPagePressed,
    /// A dispatched request resolved. Only applied when `generation` still
    /// matches the latest issued request; stale completions are discarded.
    SearchCompleted {
        generation: u64,
        result: Result<ResultPage, SearchError>,
    },
    /// Open a result's listing on the source platform in the browser.
    OpenOriginal(String),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Search service base URL override. Takes precedence over the
    /// configured endpoint.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Optional search term to seed the input with on startup. No request
    /// is fired until the user triggers one.
    pub initial_term: Option<String>,
}
