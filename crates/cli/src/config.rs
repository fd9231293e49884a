//! CLI configuration.

use anyhow::{Context, Result};
use certprep_progress::NumberLocale;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for lookup commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Settings read from an optional JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Number grouping for badge experience
    #[serde(default)]
    pub locale: NumberLocale,

    /// Maximum search results
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_search_limit() -> usize {
    10
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            search_limit: default_search_limit(),
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Parse config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid config file")
    }

    /// Load config from `path`, or defaults when no path is given.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = CliConfig::from_json("{}").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.locale, NumberLocale::EnUs);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::from_json(r#"{"locale": "de-DE", "output": "json"}"#).unwrap();
        assert_eq!(config.locale, NumberLocale::DeDe);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.search_limit, 10);
    }

    #[test]
    fn test_invalid_config() {
        assert!(CliConfig::from_json(r#"{"locale": "xx"}"#).is_err());
        assert!(CliConfig::from_json("not json").is_err());
    }

    #[tokio::test]
    async fn test_load_without_path() {
        let config = CliConfig::load(None).await.unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/certprep.json")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
