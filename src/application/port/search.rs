// SPDX-License-Identifier: MPL-2.0
//! Search service port definition.
//!
//! This module defines the [`SearchService`] trait through which the update
//! loop performs searches, plus the error taxonomy shared by every
//! implementation.
//!
//! # Design Notes
//!
//! - The trait returns a boxed future so it stays object-safe; the app
//!   holds it as `Arc<dyn SearchService>`.
//! - Cancellation is soft: callers discard late results, implementations
//!   are never asked to abort an in-flight call.

use crate::domain::{ResultPage, SearchQuery};
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// SearchError
// =============================================================================

/// Errors that can occur when resolving a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An explicit search was attempted with an empty term. Recovered
    /// locally; no request is sent.
    EmptyTerm,

    /// Transport-level failure (service unreachable, request timed out).
    Network(String),

    /// The service answered with a non-success HTTP status.
    Server {
        /// The HTTP status code that was returned.
        status: u16,
    },

    /// The response body did not match the expected shape.
    Parse(String),
}

impl SearchError {
    /// The message shown to the user. Server and network failures read the
    /// same here; the taxonomy only matters for diagnosis.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SearchError::EmptyTerm => "Please enter a search term!".to_string(),
            SearchError::Network(_) | SearchError::Server { .. } => {
                "Error searching for images. Please try again.".to_string()
            }
            SearchError::Parse(_) => {
                "The search service returned an unexpected response.".to_string()
            }
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyTerm => write!(f, "Search term is empty"),
            SearchError::Network(msg) => write!(f, "Network error: {msg}"),
            SearchError::Server { status } => write!(f, "Server error: HTTP status {status}"),
            SearchError::Parse(msg) => write!(f, "Malformed search response: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

// =============================================================================
// SearchService
// =============================================================================

/// Performs a parameterized search and resolves to one page of results or
/// an error.
///
/// Implementations must be stateless with respect to the query: issuing the
/// same query twice yields two independent results. The HTTP adapter lives
/// in `infrastructure::http`; tests provide scripted implementations.
pub trait SearchService: Send + Sync {
    /// Resolves `query` to the requested page of results.
    ///
    /// The returned page records the page number that was requested, not
    /// anything echoed by the service.
    fn search(&self, query: SearchQuery) -> BoxFuture<'static, Result<ResultPage, SearchError>>;
}
