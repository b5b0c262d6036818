// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with no I/O.
//!
//! Query and result types for the search feature. Everything here is plain
//! data; the wire format lives in the infrastructure layer and the request
//! lifecycle in the app layer.

pub mod search;

pub use search::{
    Platform, PlatformFilter, PriceFilter, ResultItem, ResultPage, SearchQuery,
};
