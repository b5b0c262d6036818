// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of the search and pagination controller against a
//! scripted search service, driven through the same message/action cycle
//! the Iced runtime would perform.

use futures_util::future::BoxFuture;
use std::sync::{Arc, Mutex};
use stock_lens::app::{Action, App, Message, Outcome};
use stock_lens::application::port::search::{SearchError, SearchService};
use stock_lens::domain::{
    Platform, PlatformFilter, PriceFilter, ResultItem, ResultPage, SearchQuery,
};

/// Port implementation that records every query it receives and answers
/// from a fixed script.
struct ScriptedService {
    requests: Mutex<Vec<SearchQuery>>,
    respond: fn(&SearchQuery) -> Result<ResultPage, SearchError>,
}

impl ScriptedService {
    fn new(respond: fn(&SearchQuery) -> Result<ResultPage, SearchError>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            respond,
        })
    }

    fn requests(&self) -> Vec<SearchQuery> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl SearchService for ScriptedService {
    fn search(&self, query: SearchQuery) -> BoxFuture<'static, Result<ResultPage, SearchError>> {
        self.requests.lock().expect("requests lock").push(query.clone());
        let result = (self.respond)(&query);
        Box::pin(async move { result })
    }
}

fn beach_page(query: &SearchQuery) -> Result<ResultPage, SearchError> {
    Ok(ResultPage {
        items: vec![ResultItem {
            image_url: "u1".to_string(),
            price: "Free".to_string(),
            platform: Platform::Pixabay,
            original_url: "o1".to_string(),
        }],
        page: query.page(),
    })
}

/// Runs the dispatched request to completion and feeds the result back,
/// the way the Iced task layer would.
async fn resolve(app: &mut App, service: &Arc<ScriptedService>, action: Action) {
    let Action::Dispatch { query, generation } = action else {
        panic!("expected a dispatch, got {action:?}");
    };
    let result = service.search(query).await;
    app.apply(Message::SearchCompleted { generation, result });
}

#[tokio::test]
async fn end_to_end_beach_scenario() {
    let service = ScriptedService::new(beach_page);
    let mut app = App::with_service(service.clone());

    app.apply(Message::TermChanged("beach".to_string()));
    app.apply(Message::PriceFilterChanged(PriceFilter::Free));
    app.apply(Message::PlatformFilterChanged(PlatformFilter::Pixabay));

    let action = app.apply(Message::SearchRequested);
    assert!(app.feed().is_loading, "loading must be visible synchronously");
    resolve(&mut app, &service, action).await;

    // The service saw exactly the query the user composed.
    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.term(), "beach");
    assert_eq!(sent.price_filter(), PriceFilter::Free);
    assert_eq!(sent.platform_filter(), PlatformFilter::Pixabay);
    assert_eq!(sent.page(), 1);

    let feed = app.feed();
    assert!(!feed.is_loading);
    assert_eq!(feed.current_page, 1);
    assert_eq!(feed.items.len(), 1);
    assert_eq!(feed.items[0].image_url, "u1");
    assert_eq!(feed.items[0].price, "Free");
    assert_eq!(feed.items[0].platform, Platform::Pixabay);
    assert_eq!(feed.items[0].original_url, "o1");
}

#[tokio::test]
async fn identical_queries_resolve_identically() {
    let service = ScriptedService::new(beach_page);
    let mut app = App::with_service(service.clone());
    app.apply(Message::TermChanged("beach".to_string()));

    let action = app.apply(Message::SearchRequested);
    resolve(&mut app, &service, action).await;
    let first = match app.outcome() {
        Outcome::Success(page) => page.clone(),
        other => panic!("expected success, got {other:?}"),
    };

    let action = app.apply(Message::SearchRequested);
    resolve(&mut app, &service, action).await;
    let second = match app.outcome() {
        Outcome::Success(page) => page.clone(),
        other => panic!("expected success, got {other:?}"),
    };

    assert_eq!(first.items, second.items);
}

#[tokio::test]
async fn empty_term_search_never_reaches_the_service() {
    let service = ScriptedService::new(beach_page);
    let mut app = App::with_service(service.clone());

    let action = app.apply(Message::SearchRequested);
    assert_eq!(action, Action::None);
    assert!(service.requests().is_empty());
    assert!(app.notice().is_some());
    assert!(!app.feed().is_loading);
}

#[tokio::test]
async fn page_change_with_empty_term_reaches_the_service() {
    let service = ScriptedService::new(beach_page);
    let mut app = App::with_service(service.clone());

    let action = app.apply(Message::NextPagePressed);
    resolve(&mut app, &service, action).await;

    let requests = service.requests();
    assert!(!requests.is_empty());
    assert_eq!(requests[0].term(), "");
    assert_eq!(requests[0].page(), 2);
    assert!(matches!(app.outcome(), Outcome::Success(_)));
}

#[tokio::test]
async fn out_of_order_resolution_keeps_the_newest_result() {
    let service = ScriptedService::new(beach_page);
    let mut app = App::with_service(service.clone());
    app.apply(Message::TermChanged("beach".to_string()));

    // R1 (page 1) then R2 (page 2) are dispatched before either resolves.
    let Action::Dispatch {
        query: q1,
        generation: g1,
    } = app.apply(Message::SearchRequested)
    else {
        panic!("expected dispatch");
    };
    let Action::Dispatch {
        query: q2,
        generation: g2,
    } = app.apply(Message::NextPagePressed)
    else {
        panic!("expected dispatch");
    };

    let r1 = service.search(q1);
    let r2 = service.search(q2);

    // R2 resolves first; R1 arrives afterwards and must be discarded.
    let result2 = r2.await;
    app.apply(Message::SearchCompleted {
        generation: g2,
        result: result2,
    });
    let result1 = r1.await;
    app.apply(Message::SearchCompleted {
        generation: g1,
        result: result1,
    });

    match app.outcome() {
        Outcome::Success(page) => assert_eq!(page.page, 2),
        other => panic!("expected success for page 2, got {other:?}"),
    }
    assert!(!app.feed().is_loading);
    assert_eq!(app.feed().current_page, 2);
}

#[tokio::test]
async fn service_failure_surfaces_and_clears_loading() {
    let service =
        ScriptedService::new(|_| Err(SearchError::Network("connection refused".to_string())));
    let mut app = App::with_service(service.clone());
    app.apply(Message::TermChanged("beach".to_string()));

    let action = app.apply(Message::SearchRequested);
    resolve(&mut app, &service, action).await;

    let feed = app.feed();
    assert!(!feed.is_loading);
    assert!(feed.items.is_empty());
    assert!(feed.error_message.is_some());

    // The failure is terminal for the attempt but not for the session: a
    // new search goes through normally.
    let action = app.apply(Message::SearchRequested);
    assert!(matches!(action, Action::Dispatch { .. }));
}
