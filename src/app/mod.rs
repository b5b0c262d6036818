// SPDX-License-Identifier: MPL-2.0
//! Application root state and the search/pagination controller.
//!
//! The `App` struct owns the query state, the outcome of the latest search
//! attempt, and the generation counter that keeps out-of-order responses
//! from clobbering newer ones. State transitions live in [`update`] as a
//! pure step so they stay auditable and testable without an Iced runtime;
//! this file wires that step into the Iced application loop.

mod feed;
mod message;
mod update;
mod view;

pub use feed::Feed;
pub use message::{Flags, Message};
pub use update::Action;

use crate::application::port::search::{SearchError, SearchService};
use crate::config;
use crate::domain::{ResultPage, SearchQuery};
use crate::infrastructure::http::HttpSearchClient;
use iced::{window, Element, Task};
use std::path::Path;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;

/// Outcome of the most recent search attempt. Exactly one is current at
/// any time; a new dispatch replaces it with `Loading` and the matching
/// completion replaces that with `Success` or `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Session start; nothing has been searched yet.
    Idle,
    /// A request is in flight. Set synchronously at dispatch, before the
    /// network call begins.
    Loading,
    /// The latest request resolved to a page of results.
    Success(ResultPage),
    /// The latest request failed. Terminal for that attempt; the user may
    /// re-trigger a search at any time.
    Failed(SearchError),
}

/// Root application state.
pub struct App {
    query: SearchQuery,
    outcome: Outcome,
    /// Last generation token issued. Increases on every dispatch.
    generation: u64,
    /// Token of the request whose completion is still awaited, if any.
    /// A completion carrying any other token is stale and gets discarded.
    in_flight: Option<u64>,
    /// Blocking validation notice (empty-term search). Kept apart from the
    /// outcome so rejected searches leave previous results on screen.
    notice: Option<String>,
    service: Arc<dyn SearchService>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("query", &self.query)
            .field("outcome", &self.outcome)
            .field("generation", &self.generation)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl App {
    /// Initializes application state from CLI flags and configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_dir.as_deref() {
            Some(dir) => config::load_from_path(&Path::new(dir).join("settings.toml"))
                .unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };
        let endpoint = flags
            .endpoint
            .unwrap_or_else(|| config.endpoint().to_string());

        let mut app = Self::with_service(Arc::new(HttpSearchClient::new(endpoint)));
        if let Some(term) = flags.initial_term {
            app.query.set_term(term);
        }

        (app, Task::none())
    }

    /// Builds an app around an arbitrary search service. This is how tests
    /// substitute a scripted service for the HTTP adapter.
    #[must_use]
    pub fn with_service(service: Arc<dyn SearchService>) -> Self {
        Self {
            query: SearchQuery::default(),
            outcome: Outcome::Idle,
            generation: 0,
            in_flight: None,
            notice: None,
            service,
        }
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The current blocking validation notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Snapshot consumed by the results view.
    #[must_use]
    pub fn feed(&self) -> Feed<'_> {
        feed::snapshot(&self.outcome, &self.query)
    }

    fn title(&self) -> String {
        String::from("StockLens")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}
