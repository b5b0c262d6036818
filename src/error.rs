// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Top-level errors for configuration and bootstrap I/O.
///
/// Search-request failures have their own taxonomy in
/// [`crate::application::port::search::SearchError`]; this enum only covers
/// what can go wrong before the update loop is running.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Configuration Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
