//! Configuration loading from disk

use haags::config::{ColorOption, Config, OutputFormat};
use haags::error::ConfigError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("haags.toml");
    fs::write(
        &path,
        r#"
[engine]
backtrack_limit = 100000
rules = "regels.toml"

[output]
format = "jsonl"
color = "always"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.engine.backtrack_limit, Some(100_000));
    assert_eq!(
        config.engine.rules_path(temp.path()),
        Some(temp.path().join("regels.toml"))
    );
    assert_eq!(config.output.format, OutputFormat::Jsonl);
    assert_eq!(config.output.color, ColorOption::Always);
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = Config::parse("[output]\nformat = \"jsonl\"\n").unwrap();
    assert_eq!(config.output.format, OutputFormat::Jsonl);
    assert_eq!(config.output.color, ColorOption::Auto);
    assert_eq!(config.engine.backtrack_limit, None);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let result = Config::parse("[engine\nbacktrack_limit = 1");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let result = Config::parse("[engine]\nbacktrack_limit = \"veel\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validation_error_message() {
    let err = Config::parse("[engine]\nbacktrack_limit = 0\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: engine.backtrack_limit must be greater than 0"
    );
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = Config::parse("[engine]\nbacktrack_limit = 42\n\n[output]\ncolor = \"never\"\n").unwrap();
    let serialized = toml::to_string(&config).unwrap();
    assert_eq!(Config::parse(&serialized).unwrap(), config);
}
