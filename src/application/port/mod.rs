// SPDX-License-Identifier: MPL-2.0
//! Port (trait) definitions implemented by the infrastructure layer.

pub mod search;

pub use search::{SearchError, SearchService};
