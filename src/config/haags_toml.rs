//! Parsing and validation for haags.toml configuration files

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration struct for haags.toml
///
/// Every section is optional; an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.backtrack_limit == Some(0) {
            return Err(ConfigError::Validation(
                "engine.backtrack_limit must be greater than 0".to_string(),
            ));
        }

        if let Some(rules) = &self.engine.rules
            && rules.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "engine.rules must name a rule table file".to_string(),
            ));
        }

        Ok(())
    }
}

/// Engine section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Backtracking cap per regex match; the regex crate default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backtrack_limit: Option<usize>,

    /// Alternate rule table, relative to the configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<PathBuf>,
}

impl EngineConfig {
    /// Resolves `rules` against the directory holding the configuration file
    pub fn rules_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.rules.as_ref().map(|rules| {
            if rules.is_absolute() {
                rules.clone()
            } else {
                base_dir.join(rules)
            }
        })
    }
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON Lines format
    Jsonl,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}
