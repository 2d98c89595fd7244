//! Widget configuration.
//!
//! # Responsibility
//! - Name the data location and the DOM element ids the widget binds to.
//! - Parse overrides from JSON, defaulting every omitted field.
//!
//! # Invariants
//! - Unknown fields are rejected so typos in element ids surface early.

use crate::catalog::ALL_PROJECTS_ID;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Configuration parse/read failure.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read widget config: {err}"),
            Self::Parse(err) => write!(f, "invalid widget config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Data location and element ids for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Relative location of the projects document.
    pub data_url: String,
    /// Container receiving featured cards.
    pub featured_id: String,
    /// Container receiving the full (or searched) card list.
    pub all_id: String,
    /// Container receiving category filter buttons.
    pub filters_id: String,
    /// Text input driving search.
    pub search_id: String,
    /// Label of the synthetic "all" filter button.
    pub all_label: String,
    /// Render the full list on start when its container exists.
    pub render_all_on_start: bool,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            data_url: "assets/data/projects.json".to_string(),
            featured_id: "featured-projects".to_string(),
            all_id: ALL_PROJECTS_ID.to_string(),
            filters_id: "category-filters".to_string(),
            search_id: "project-search".to_string(),
            all_label: "Tous".to_string(),
            render_all_on_start: true,
        }
    }
}

impl PortfolioConfig {
    /// Parses a JSON config; omitted fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
