// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports for dependency inversion.
//!
//! The app layer drives searches through the [`port::search::SearchService`]
//! trait rather than a concrete HTTP client, so the update loop can be
//! exercised in tests with a scripted service and the reqwest adapter stays
//! confined to the infrastructure layer.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain types only
//! - Infrastructure implements application layer ports
//! - Presentation (the Iced app) consumes ports through trait objects

pub mod port;
