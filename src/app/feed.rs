// SPDX-License-Identifier: MPL-2.0
//! Result presentation feed.
//!
//! A pure read model over the current [`Outcome`] and query state: it
//! exposes exactly what the results view needs and triggers nothing.

use super::Outcome;
use crate::domain::{ResultItem, SearchQuery};

/// Display snapshot consumed by the results view.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed<'a> {
    /// True while a request is in flight.
    pub is_loading: bool,
    /// Items of the latest successful page; empty in every other state.
    pub items: &'a [ResultItem],
    /// User-facing message of the latest failure, if any.
    pub error_message: Option<String>,
    /// The current page cursor, as requested by the user.
    pub current_page: u32,
}

/// Derives the feed from the outcome and query state. Stateless beyond
/// "last received page".
pub(super) fn snapshot<'a>(outcome: &'a Outcome, query: &SearchQuery) -> Feed<'a> {
    let (is_loading, items, error_message): (bool, &[ResultItem], Option<String>) = match outcome {
        Outcome::Idle => (false, &[], None),
        Outcome::Loading => (true, &[], None),
        Outcome::Success(page) => (false, &page.items, None),
        Outcome::Failed(error) => (false, &[], Some(error.user_message())),
    };

    Feed {
        is_loading,
        items,
        error_message,
        current_page: query.page(),
    }
}
