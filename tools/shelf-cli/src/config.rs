//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shelf_catalog::search::SortKey;

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalogue source configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.render(path)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Serialize in the format implied by the file extension.
    pub fn render(&self, path: &Path) -> Result<String> {
        if is_json(path) {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(toml::to_string_pretty(self)?)
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Where products come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON catalogue snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Reject the snapshot if any product is invalid.
    #[serde(default)]
    pub strict: bool,
}

/// How results are shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol appended to prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Sort order used when none is given.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Always print JSON.
    #[serde(default)]
    pub json: bool,
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            default_sort: SortKey::Popular,
            json: false,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "warn" or "shelf_catalog=debug".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Human,
        }
    }
}

/// Generate a default shelf.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Shelf catalogue configuration

[catalog]
path = "{catalog_path}"
strict = false

[display]
currency_symbol = "€"
default_sort = "popular"
json = false

[log]
level = "warn"
format = "human"
"#,
        catalog_path = catalog_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("products.json")).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("products.json"));
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str("[display]\ndefault_sort = \"price-desc\"\n").unwrap();
        assert_eq!(config.display.default_sort, SortKey::PriceDesc);
        assert_eq!(config.display.currency_symbol, "€");
        assert!(!config.catalog.strict);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.json");
        let mut config = CliConfig::default();
        config.catalog.strict = true;
        config.log.format = LogFormat::Json;

        config.save(&path).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        let mut config = CliConfig::default();
        config.catalog.path = Some("feed.json".to_string());

        config.save(&path).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_sort_rejected() {
        let parsed: Result<CliConfig, _> = toml::from_str("[display]\ndefault_sort = \"newest\"\n");
        assert!(parsed.is_err());
    }
}
