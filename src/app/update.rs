// SPDX-License-Identifier: MPL-2.0
//! Update logic for the search and pagination controller.
//!
//! The controller is split into a pure step and a thin effect layer:
//! [`App::apply`] mutates state and reports the side effect to run as an
//! [`Action`], and [`update`] turns that action into an `iced::Task`. Tests
//! drive `apply` directly and never need the Iced runtime.

use super::{App, Message, Outcome};
use crate::application::port::search::SearchError;
use crate::domain::SearchQuery;
use iced::Task;

/// Side effect the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Perform a search for the given query snapshot. The generation token
    /// must be echoed back in the resulting `SearchCompleted` message.
    Dispatch { query: SearchQuery, generation: u64 },
    /// Open a URL in the system browser.
    OpenUrl(String),
}

/// Translates the pure update step into Iced tasks.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match app.apply(message) {
        Action::None => Task::none(),
        Action::Dispatch { query, generation } => {
            let search = app.service.search(query);
            Task::perform(search, move |result| Message::SearchCompleted {
                generation,
                result,
            })
        }
        Action::OpenUrl(url) => {
            if let Err(e) = open::that(&url) {
                eprintln!("Failed to open {url}: {e}");
            }
            Task::none()
        }
    }
}

impl App {
    /// Applies one message to the controller state and returns the side
    /// effect to perform. This is the single place search state mutates.
    pub fn apply(&mut self, message: Message) -> Action {
        match message {
            Message::TermChanged(term) => {
                self.query.set_term(term);
                // Editing the term withdraws a pending validation notice.
                self.notice = None;
                Action::None
            }
            Message::PriceFilterChanged(filter) => {
                self.query.set_price_filter(filter);
                Action::None
            }
            Message::PlatformFilterChanged(filter) => {
                self.query.set_platform_filter(filter);
                Action::None
            }
            Message::SearchRequested => {
                if self.query.term_is_empty() {
                    // Rejected locally: no request, no loading transition,
                    // previous results stay on screen.
                    self.notice = Some(SearchError::EmptyTerm.user_message());
                    return Action::None;
                }
                self.dispatch()
            }
            // Page changes deliberately skip the empty-term guard; the
            // original front end searched on page changes regardless.
            Message::NextPagePressed => {
                self.query.next_page();
                self.dispatch()
            }
            Message::PreviousPagePressed => {
                if self.query.previous_page() {
                    self.dispatch()
                } else {
                    Action::None
                }
            }
            Message::SearchCompleted { generation, result } => {
                if self.in_flight != Some(generation) {
                    // Stale completion: a newer request was dispatched after
                    // this one. Discard it; loading stays until the newest
                    // request resolves.
                    return Action::None;
                }
                self.in_flight = None;
                self.outcome = match result {
                    Ok(page) => Outcome::Success(page),
                    Err(error) => Outcome::Failed(error),
                };
                Action::None
            }
            Message::OpenOriginal(url) => Action::OpenUrl(url),
        }
    }

    /// Issues a fresh generation token and transitions to `Loading` before
    /// the request itself runs, so the loading state is observable
    /// synchronously.
    fn dispatch(&mut self) -> Action {
        self.notice = None;
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.outcome = Outcome::Loading;
        Action::Dispatch {
            query: self.query.clone(),
            generation: self.generation,
        }
    }
}
