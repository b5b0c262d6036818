// SPDX-License-Identifier: MPL-2.0
//! `stock_lens` is a stock image search front end built with the Iced GUI
//! framework.
//!
//! It queries a remote search service for stock images across platforms
//! (Pexels, Pixabay), with price-tier filtering and page-based navigation.
//! The interesting part lives in [`app`]: an Elm-style update loop that owns
//! the query state, dispatches search requests asynchronously, and discards
//! responses that have been superseded by a newer request.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
