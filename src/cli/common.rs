//! Common helper functions shared across CLI commands
//!
//! Every command loads the configuration the same way and builds the same
//! rule table from it, so that `check` validates exactly what `translate`
//! will run.

use crate::cli::args::{GlobalArgs, OutputFormat};
use crate::config::{self, ColorOption, Config};
use crate::error::{ConfigError, HaagsError, RuleError};
use crate::rules::RuleTable;
use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "haags.toml";

/// Configuration plus the directory relative paths in it resolve against
#[derive(Debug)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

/// Load the configuration
///
/// An explicit `--config` path must exist. Without one, `haags.toml` in the
/// working directory is used when present, and defaults otherwise.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit file cannot be read.
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if the file is invalid.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.exists() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(LoadedConfig {
                    config: Config::default(),
                    base_dir: PathBuf::from("."),
                });
            }
            default
        }
    };

    let config = Config::load(&path)?;
    let base_dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(LoadedConfig { config, base_dir })
}

/// Build the rule table the configuration asks for
///
/// `--rules` wins over `engine.rules`; without either the built-in table is
/// used. The configured backtrack limit applies to whichever table is built.
///
/// # Errors
///
/// Returns `RuleError` if the table cannot be read or does not validate.
pub(crate) fn build_table(
    loaded: &LoadedConfig,
    rules_override: Option<&Path>,
) -> Result<RuleTable, RuleError> {
    let rules_path = rules_override
        .map(Path::to_path_buf)
        .or_else(|| loaded.config.engine.rules_path(&loaded.base_dir));

    let mut builder = match &rules_path {
        Some(path) => RuleTable::builder_from_path(path)?,
        None => RuleTable::builtin_builder()?,
    };

    if let Some(limit) = loaded.config.engine.backtrack_limit {
        builder = builder.backtrack_limit(limit);
    }

    builder.build()
}

/// Load configuration and rule table for a command
pub(crate) fn prepare(global: &GlobalArgs) -> Result<(LoadedConfig, RuleTable), HaagsError> {
    let loaded = load_config(global.config.as_deref())?;
    let table = build_table(&loaded, global.rules.as_deref())?;
    Ok((loaded, table))
}

/// Command-line format if given, else the configured one
pub(crate) fn output_format(flag: Option<OutputFormat>, config: &Config) -> config::OutputFormat {
    flag.map(Into::into).unwrap_or(config.output.format)
}

/// Command-line color if given, else the configured one
pub(crate) fn color_option(global: &GlobalArgs, config: &Config) -> ColorOption {
    global.color.map(Into::into).unwrap_or(config.output.color)
}

/// Print an error and return the error exit code
pub(crate) fn fail(error: &HaagsError) -> i32 {
    eprintln!("Error: {}", error);
    EXIT_ERROR
}
