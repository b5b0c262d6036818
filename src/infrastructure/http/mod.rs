// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the search service port.
//!
//! Builds `GET {endpoint}/search?query=…&filter=…&platform=…&page=…`
//! requests and parses the JSON response into domain types. All four query
//! parameters are always present; `All` filters encode as empty strings,
//! matching the shape the service expects.

use crate::application::port::search::{SearchError, SearchService};
use crate::domain::{Platform, ResultItem, ResultPage, SearchQuery};
use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::time::Duration;

/// A stuck request must eventually clear the loading indicator, so every
/// request carries a hard timeout. Timeouts surface as network errors.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const USER_AGENT: &str = concat!("StockLens/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Wire format
// =============================================================================

/// Response envelope: `{ "prices": [ … ] }`. Anything else is a parse
/// error; the service is not assumed to echo pagination metadata.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    prices: Vec<WireItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    image_url: String,
    price: PriceLabel,
    platform: Platform,
    original_url: String,
}

/// The service sends the price as either a string label or a bare number;
/// both are display values, never validated numerically.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PriceLabel {
    Text(String),
    Number(serde_json::Number),
}

impl PriceLabel {
    fn into_display(self) -> String {
        match self {
            PriceLabel::Text(s) => s,
            PriceLabel::Number(n) => n.to_string(),
        }
    }
}

/// Parses a response body into the page of results for `page`.
fn parse_page(body: &str, page: u32) -> Result<ResultPage, SearchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    let items = response
        .prices
        .into_iter()
        .map(|item| ResultItem {
            image_url: item.image_url,
            price: item.price.into_display(),
            platform: item.platform,
            original_url: item.original_url,
        })
        .collect();

    Ok(ResultPage { items, page })
}

/// The query parameters for a search request, in the order the original
/// front end sent them.
fn request_params(query: &SearchQuery) -> [(&'static str, String); 4] {
    [
        ("query", query.term().to_string()),
        ("filter", query.price_filter().as_param().to_string()),
        ("platform", query.platform_filter().as_param().to_string()),
        ("page", query.page().to_string()),
    ]
}

// =============================================================================
// HttpSearchClient
// =============================================================================

/// [`SearchService`] implementation backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    endpoint: String,
}

impl HttpSearchClient {
    /// `endpoint` is the service base URL without a trailing slash, e.g.
    /// `http://localhost:5000`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    async fn perform(endpoint: String, query: SearchQuery) -> Result<ResultPage, SearchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let page = query.page();
        let response = client
            .get(format!("{endpoint}/search"))
            .query(&request_params(&query))
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Server {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        parse_page(&body, page).inspect_err(|e| {
            eprintln!("Search response from {endpoint} could not be parsed: {e}");
        })
    }
}

impl SearchService for HttpSearchClient {
    fn search(&self, query: SearchQuery) -> BoxFuture<'static, Result<ResultPage, SearchError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(Self::perform(endpoint, query))
    }
}
