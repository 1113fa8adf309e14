//! Error types for haags
//!
//! Rule table problems are startup errors: a table that fails to build is
//! rejected as a whole and nothing gets translated with it. Translation itself
//! only fails when the regex engine gives up on a match at runtime.

use crate::types::RuleId;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for our schema
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule table errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Rule table file could not be parsed into rules
    #[error("Invalid rule table: {0}")]
    InvalidDefinition(String),

    /// A rule pattern does not compile
    #[error("Invalid regex pattern for rule {rule} '{pattern}': {message}")]
    InvalidRegex {
        rule: RuleId,
        pattern: String,
        message: String,
    },

    /// A replacement template refers to a group its pattern does not have
    #[error("Invalid replacement for rule {rule} '{template}': {message}")]
    InvalidTemplate {
        rule: RuleId,
        template: String,
        message: String,
    },

    /// The table has no rules
    #[error("Rule table contains no rules")]
    EmptyTable,
}

/// Runtime translation errors
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The regex engine could not finish matching a rule
    #[error("Rule {rule} '{pattern}' failed to match: {message}")]
    Match {
        rule: RuleId,
        pattern: String,
        message: String,
    },
}

/// Top-level error type for haags
#[derive(Debug, thiserror::Error)]
pub enum HaagsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule table error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Translation error
    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
