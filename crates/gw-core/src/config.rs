//! Configuration management for giveaway

use crate::draw::MAX_SEED;
use crate::error::{GiveawayError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of distinct mentions a comment must carry
pub const DEFAULT_REQUIRED_MENTIONS: usize = 3;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Eligibility rule settings
    pub rules: RuleConfig,
    /// Input table settings
    pub source: SourceConfig,
    /// Draw settings
    pub draw: DrawConfig,
    /// Report settings
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GiveawayError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.rules.required_mentions == 0 {
            return Err(GiveawayError::Config(
                "rules.required_mentions must be at least 1".to_string(),
            ));
        }

        if !self.source.delimiter.is_ascii() {
            return Err(GiveawayError::Config(format!(
                "source.delimiter must be a single ASCII character, got '{}'",
                self.source.delimiter
            )));
        }

        if let Some(seed) = self.draw.seed {
            if seed > MAX_SEED {
                return Err(GiveawayError::Config(format!(
                    "draw.seed must be at most {}, got {}",
                    MAX_SEED, seed
                )));
            }
        }

        let username = self.source.username_column.trim();
        let text = self.source.text_column.trim();
        if username.is_empty() || text.is_empty() {
            return Err(GiveawayError::Config(
                "source column names cannot be empty".to_string(),
            ));
        }
        if username == text {
            return Err(GiveawayError::Config(format!(
                "source.username_column and source.text_column are both '{}'",
                username
            )));
        }

        Ok(())
    }
}

/// Eligibility rule configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Exact number of distinct mentions an eligible comment carries
    pub required_mentions: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            required_mentions: DEFAULT_REQUIRED_MENTIONS,
        }
    }
}

/// Input table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Header of the commenter column
    pub username_column: String,
    /// Header of the comment body column
    pub text_column: String,
    /// Field delimiter
    pub delimiter: char,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            username_column: "username".to_string(),
            text_column: "text".to_string(),
            delimiter: ',',
        }
    }
}

/// Draw configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Fixed seed for reproducible draws; system entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Default report format
    pub format: String,
    /// Include the per-user chance table
    pub show_chances: bool,
    /// List rejected comments with their reason
    pub show_rejected: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            show_chances: true,
            show_rejected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rules.required_mentions, 3);
        assert_eq!(config.source.username_column, "username");
        assert_eq!(config.source.text_column, "text");
        assert_eq!(config.source.delimiter, ',');
        assert!(config.draw.seed.is_none());
        assert!(config.report.show_chances);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[rules]"));
        assert!(toml.contains("[source]"));

        let config2 = Config::from_toml(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml("[rules]\nrequired_mentions = 2\n").unwrap();
        assert_eq!(config.rules.required_mentions, 2);
        assert_eq!(config.source.text_column, "text");
        assert_eq!(config.report.format, "text");
    }

    #[test]
    fn test_seed_from_toml() {
        let config = Config::from_toml("[draw]\nseed = 42\n").unwrap();
        assert_eq!(config.draw.seed, Some(42));
    }

    #[test]
    fn test_entropy_seed_round_trips() {
        let seed = crate::draw::Drawer::from_entropy().seed().unwrap();
        let mut config = Config::default();
        config.draw.seed = Some(seed);

        let toml = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml).unwrap().draw.seed, Some(seed));

        config.draw.seed = Some(MAX_SEED);
        let toml = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml).unwrap().draw.seed, Some(MAX_SEED));
    }

    #[test]
    fn test_seed_above_toml_range_rejected() {
        let mut config = Config::default();
        config.draw.seed = Some(MAX_SEED + 1);
        assert!(matches!(config.validate(), Err(GiveawayError::Config(_))));
    }

    #[test]
    fn test_zero_mentions_rejected() {
        let result = Config::from_toml("[rules]\nrequired_mentions = 0\n");
        assert!(matches!(result, Err(GiveawayError::Config(_))));
    }

    #[test]
    fn test_same_column_names_rejected() {
        let result = Config::from_toml("[source]\nusername_column = \"text\"\n");
        assert!(matches!(result, Err(GiveawayError::Config(_))));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let result = Config::from_toml("[source]\ndelimiter = \"é\"\n");
        assert!(matches!(result, Err(GiveawayError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[source]\ndelimiter = \";\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.source.delimiter, ';');
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/giveaway.toml"));
        assert!(matches!(result, Err(GiveawayError::FileNotFound(_))));
    }
}
