// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing application ports.

pub mod http;
