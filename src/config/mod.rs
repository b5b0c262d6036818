// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! The only setting today is the search service endpoint; the CLI
//! `--endpoint` flag takes precedence over the file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StockLens";

/// Base URL of the search service when nothing else is configured.
/// Host and port are a collaborator detail; the core only needs a
/// parameterized search request against it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search service base URL, e.g. `http://localhost:5000`.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Config {
    /// The endpoint to use, falling back to [`DEFAULT_ENDPOINT`].
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(config).map_err(|e| crate::error::Error::Config(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
