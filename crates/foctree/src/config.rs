//! Configuration types for focus tree processing.
//!
//! This module provides configuration structures that control layout and
//! localisation output. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Grid geometry for the layout resolver.
//! - [`LocalisationConfig`] - Language and key naming for localisation
//!   export.
//!
//! # Example
//!
//! ```
//! # use foctree::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().cell_size(), 240);
//! assert_eq!(config.localisation().language(), "english");
//! ```

use serde::Deserialize;

/// Edge length of one layout grid cell, in canvas units.
const DEFAULT_CELL_SIZE: i64 = 240;

fn default_cell_size() -> i64 {
    DEFAULT_CELL_SIZE
}

fn default_language() -> String {
    "english".to_string()
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Localisation configuration section.
    #[serde(default)]
    localisation: LocalisationConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, localisation: LocalisationConfig) -> Self {
        Self {
            layout,
            localisation,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the localisation configuration.
    pub fn localisation(&self) -> &LocalisationConfig {
        &self.localisation
    }
}

/// Grid geometry for the layout resolver.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Canvas units per grid cell.
    #[serde(default = "default_cell_size")]
    cell_size: i64,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given cell size.
    pub fn new(cell_size: i64) -> Self {
        Self { cell_size }
    }

    /// Returns the edge length of one grid cell in canvas units.
    pub fn cell_size(&self) -> i64 {
        self.cell_size
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Language and key naming for localisation export.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalisationConfig {
    /// Language name for the `l_<language>:` file header.
    #[serde(default = "default_language")]
    language: String,

    /// Prefix for localisation keys. Defaults to the upper-cased first
    /// three letters of the language when unset.
    #[serde(default)]
    key_prefix: Option<String>,
}

impl LocalisationConfig {
    /// Creates a new [`LocalisationConfig`].
    pub fn new(language: impl Into<String>, key_prefix: Option<String>) -> Self {
        Self {
            language: language.into(),
            key_prefix,
        }
    }

    /// Returns the language name.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the key prefix, deriving one from the language when not
    /// explicitly configured.
    pub fn key_prefix(&self) -> String {
        match &self.key_prefix {
            Some(prefix) => prefix.clone(),
            None => self
                .language
                .chars()
                .take(3)
                .collect::<String>()
                .to_uppercase(),
        }
    }
}

impl Default for LocalisationConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            key_prefix: None,
        }
    }
}
