//! Formatting configuration.
//!
//! Holds the defaults the value-level helpers fall back to: how many decimal
//! places to render and which separators to group numbers with.
//!
//! Configuration is read from `~/.config/tmplfmt/config.json` when present.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::format::DEFAULT_DECIMAL_PLACES;
use crate::utils::validation::check_file_exists;

/// Application name used for the config directory path
const APP_NAME: &str = "tmplfmt";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Separators used when rendering numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    pub grouping_separator: String,
    pub decimal_separator: String,
}

impl NumberLocale {
    fn new(grouping_separator: &str, decimal_separator: &str) -> Self {
        Self {
            grouping_separator: grouping_separator.to_string(),
            decimal_separator: decimal_separator.to_string(),
        }
    }

    /// Look up a preset by its language tag (e.g. `de-DE`).
    /// Matching ignores case and accepts `_` in place of `-`.
    pub fn for_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        match tag.as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::new(",", ".")),
            "de" | "de-de" | "es-es" | "it-it" | "nl-nl" => Some(Self::new(".", ",")),
            "fr" | "fr-fr" => Some(Self::new("\u{202f}", ",")),
            "de-ch" => Some(Self::new("’", ".")),
            _ => None,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::new(",", ".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub decimal_places: usize,
    pub locale: NumberLocale,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            locale: NumberLocale::default(),
        }
    }
}

impl FormatConfig {
    /// Load from the user config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        check_file_exists(path)?;
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(
            path = %path.display(),
            decimal_places = config.decimal_places,
            "Loaded format config"
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
